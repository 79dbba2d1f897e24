//! Site chrome shared by every page: header with the route-derived menu,
//! footer and the in-app link.

pub mod footer;
pub mod header;
pub mod link;

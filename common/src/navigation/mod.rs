//! Static route table, menu derivation and the collapsible menu.

pub mod menu;
pub mod routes;

//! One component per routed page.

pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod markdown;
pub mod not_found;
pub mod stories;

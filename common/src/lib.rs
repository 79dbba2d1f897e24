//! Framework-free core of the smelly-cat site.
//!
//! Everything here compiles natively and carries no browser dependency: the
//! address-autocomplete state machine, suggestion selection, the contact form
//! submission flow, the static route table and the map tile math. The Yew
//! frontend owns the timers and HTTP calls and feeds their outcomes back into
//! these types.

pub mod config;
pub mod error;
pub mod forms;
pub mod map;
pub mod model;
pub mod navigation;
pub mod requests;

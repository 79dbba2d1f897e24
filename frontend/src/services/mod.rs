//! Outbound HTTP calls. Both return plain `Result`s; the contact component
//! decides what a failure means for the visitor.

pub mod emailjs;
pub mod nominatim;

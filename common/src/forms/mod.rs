//! Contact page behaviour: address autocomplete, suggestion selection,
//! validation and the submission flow.

pub mod autocomplete;
pub mod submission;
pub mod suggestion;
pub mod validation;

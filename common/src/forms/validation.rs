//! Field rules of the contact form.
//!
//! Full name and email are required, the email must be well formed and the
//! terms box must be ticked. Everything else is optional.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::contact::ContactFormValues;

/// Same acceptance as the de-facto browser form validators: dot-separated
/// atoms before the `@`, dot-separated DNS labels after it, no TLD required.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    City,
    PostalCode,
    Address,
    Message,
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(Field::FullName) => write!(f, "Full name is required."),
            FieldError::Required(Field::Email) => write!(f, "Email is required."),
            FieldError::Required(Field::Terms) => write!(f, "You must accept the terms."),
            FieldError::Required(_) => write!(f, "This field is required."),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address."),
        }
    }
}

/// Returns every rule `values` currently breaks. Empty means valid.
pub fn validate(values: &ContactFormValues) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if is_blank(&values.full_name) {
        errors.push(FieldError::Required(Field::FullName));
    }

    match values.email.as_deref() {
        None | Some("") => errors.push(FieldError::Required(Field::Email)),
        Some(email) if !is_valid_email(email) => errors.push(FieldError::InvalidEmail),
        Some(_) => {}
    }

    if !values.terms {
        errors.push(FieldError::Required(Field::Terms));
    }

    errors
}

pub fn is_valid(values: &ContactFormValues) -> bool {
    validate(values).is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LEN {
        return false;
    }
    match email.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LEN => EMAIL.is_match(email),
        _ => false,
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

//! Failure types for the two outbound calls the site makes.
//!
//! Neither is ever shown verbatim to a visitor: a failed lookup degrades to
//! "no suggestions" and a failed send to one fixed message. They exist so the
//! frontend can log what went wrong.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("address lookup request failed: {0}")]
    Network(String),

    #[error("address lookup returned HTTP {0}")]
    Status(u16),

    #[error("address lookup response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("email request failed: {0}")]
    Network(String),

    #[error("email provider rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("email payload could not be encoded: {0}")]
    Encode(String),
}

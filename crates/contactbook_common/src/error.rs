// --- File: crates/contactbook_common/src/error.rs ---
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name to the human readable messages it failed with.
pub type FieldMessages = BTreeMap<String, Vec<String>>;

/// The base error type for all Contactbook errors surfaced over HTTP.
///
/// Feature crates keep their own error enums and convert into this one at the
/// HTTP boundary.
#[derive(Error, Debug)]
pub enum ContactbookError {
    /// The request body could not be read
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// One or more form fields failed their constraints
    #[error("Validation failed for: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    InvalidFields(FieldMessages),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ContactbookError {
    fn status_code(&self) -> u16 {
        match self {
            ContactbookError::ParseError(_) => 400,
            ContactbookError::InvalidFields(_) => 400,
        }
    }
}

impl From<validator::ValidationErrors> for ContactbookError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ContactbookError::InvalidFields(crate::models::field_messages(&errors))
    }
}

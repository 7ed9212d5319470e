//! Validation error types for client-side input checks
//!
//! These errors cover checks that run before any remote call is made.
//! User-facing wording is resolved by the message catalog in the services
//! layer, so variants stay language-neutral.

use thiserror::Error;

/// Input validation failures
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password too short (min: {min})")]
    PasswordTooShort { min: usize },

    #[error("Incomplete verification code")]
    IncompleteCode,
}

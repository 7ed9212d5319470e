//! Client-side error types and error handling.

mod types;

// Re-export all error types
pub use types::ValidationError;

use thiserror::Error;

/// Core client errors (general purpose)
///
/// Remote calls, local storage and input checks all surface through this
/// type. The verification controller collapses it into a failure class and
/// a user-facing message; nothing here is ever shown to the user verbatim.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered and refused the request
    #[error("Rejected by server (status {status})")]
    Rejected { status: u16, message: Option<String> },

    /// The call never completed: DNS, timeout, transport, malformed reply
    #[error("Network failure: {message}")]
    Network { message: String },

    /// On-device credential store failure
    #[error("Storage failure: {message}")]
    Storage { message: String },

    /// Client-side bug or broken flow state
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Rejection carrying the server's status and optional message
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        ClientError::Rejected { status, message }
    }

    /// Transport-level failure
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::Network { message: message.into() }
    }

    /// Local storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        ClientError::Storage { message: message.into() }
    }

    /// Client-side invariant breakage
    pub fn internal(message: impl Into<String>) -> Self {
        ClientError::Internal { message: message.into() }
    }

    /// Server-supplied message, if this is a rejection that carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

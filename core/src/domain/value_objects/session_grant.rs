//! Session grant value object returned by identity endpoints.

use serde::{Deserialize, Serialize};

/// Tokens granted by the identity service after a successful check
///
/// Different endpoints fill different fields: login, refresh and account
/// activation return the session pair; password recovery returns a one-time
/// reset token instead. Everything is optional so one shape covers all of
/// them, with helpers for the combinations callers actually need.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionGrant {
    /// Bearer token for API authentication
    pub access_token: Option<String>,

    /// Token for obtaining new access tokens
    pub refresh_token: Option<String>,

    /// Access token expiration time in seconds
    pub expires_in: Option<i64>,

    /// One-time token authorizing a password reset
    pub reset_token: Option<String>,
}

impl SessionGrant {
    /// Creates a grant carrying a full session pair
    pub fn session(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            expires_in: None,
            reset_token: None,
        }
    }

    /// Creates a grant carrying only a password-reset token
    pub fn recovery(reset_token: impl Into<String>) -> Self {
        Self {
            reset_token: Some(reset_token.into()),
            ..Default::default()
        }
    }

    /// Access and refresh tokens together, if both are present
    pub fn session_pair(&self) -> Option<(&str, &str)> {
        match (self.access_token.as_deref(), self.refresh_token.as_deref()) {
            (Some(access), Some(refresh)) => Some((access, refresh)),
            _ => None,
        }
    }
}

/// Acknowledgement returned when the server dispatches a verification code
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CodeIssued {
    /// Server message describing the dispatch, if any
    pub message: Option<String>,
}

impl CodeIssued {
    /// Creates an acknowledgement with a server message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

//! Registration request value object.

use serde::{Deserialize, Serialize};

/// Details collected by the sign-up form
///
/// Submitting a registration makes the server create a dormant account and
/// dispatch an activation code to the email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    /// Email address, also the account subject
    pub email: String,

    /// Chosen password
    pub password: String,

    /// Display name
    pub full_name: String,
}

impl Registration {
    /// Creates a new registration request
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
    }
}

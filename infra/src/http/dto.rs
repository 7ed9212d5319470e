//! Request and response payloads for the identity endpoints
//!
//! Requests are validated locally before anything is sent, so obviously
//! broken input never spends a network round trip.

use serde::{Deserialize, Serialize};
use validator::Validate;

use em_core::domain::entities::ProfileDraft;
use em_core::domain::value_objects::SessionGrant;
use em_core::errors::{ClientResult, ValidationError};

/// Ask the server to dispatch a verification code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueCodeRequest {
    #[validate(email)]
    pub email: String,
}

/// Submit a verification code on its own
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email)]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

/// Submit a profile change together with its verification code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(email)]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,

    /// Changed fields only; the server leaves the rest untouched
    #[serde(flatten)]
    pub draft: ProfileDraft,
}

/// Create an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(min = 1))]
    pub full_name: String,
}

/// Sign in with email and password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Exchange a refresh token for a new session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Finish a password recovery with the ticket from a verified challenge
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub ticket: String,

    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

/// Token payload inside a successful auth envelope
///
/// Endpoints fill different subsets: login and activation return the session
/// pair, recovery returns `resetToken`, some older backends return nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialData {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub reset_token: Option<String>,
}

impl From<CredentialData> for SessionGrant {
    fn from(data: CredentialData) -> Self {
        SessionGrant {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
            expires_in: data.expires_in,
            reset_token: data.reset_token,
        }
    }
}

/// Run `validator` checks and map the first failure into a core error
pub(crate) fn ensure_valid<T: Validate>(request: &T) -> ClientResult<()> {
    if let Err(errors) = request.validate() {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|field| field.to_string())
            .unwrap_or_else(|| "request".to_string());
        return Err(ValidationError::InvalidFormat { field }.into());
    }
    Ok(())
}

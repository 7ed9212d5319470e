//! Identity gateway trait defining the client's view of the identity service.

use async_trait::async_trait;

use crate::domain::entities::challenge::PurposeKind;
use crate::domain::entities::profile::ProfileDraft;
use crate::domain::value_objects::{CodeIssued, Registration, SessionGrant};
use crate::errors::ClientResult;

/// Gateway trait for the remote identity service
///
/// This trait is the only path from the client core to the identity
/// endpoints of the storefront API. Implementations own transport, JSON
/// mapping and error classification; callers receive domain values or a
/// `ClientError` that is already safe to collapse into a failure class.
///
/// Errors returned as `ClientError::Rejected` carry the server's status
/// code and optional localized message.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Ask the server to dispatch a fresh verification code
    ///
    /// Used by the resend sub-flow and by flows that open a verification
    /// screen. The server invalidates any previously issued code for the
    /// same subject and purpose.
    ///
    /// # Arguments
    /// * `kind` - Which verification flow the code belongs to
    /// * `subject` - Email address the code is sent to
    async fn issue_code(&self, kind: PurposeKind, subject: &str) -> ClientResult<CodeIssued>;

    /// Submit a complete verification code for checking
    ///
    /// Covers account activation and password recovery. Profile updates
    /// carry a payload and go through
    /// [`submit_profile_update`](Self::submit_profile_update) instead;
    /// implementations refuse `PurposeKind::ProfileUpdate` here.
    ///
    /// # Arguments
    /// * `kind` - Which verification flow the code belongs to
    /// * `subject` - Email address the code was sent to
    /// * `code` - The complete 6-digit code
    ///
    /// # Returns
    /// * `Ok(SessionGrant)` - Accepted; tokens depend on the flow
    /// * `Err(ClientError)` - Rejected code, transport failure, and so on
    ///
    /// # Example
    /// ```no_run
    /// # use em_core::gateways::IdentityGateway;
    /// # use em_core::domain::entities::challenge::PurposeKind;
    /// # async fn example(gateway: &impl IdentityGateway) -> Result<(), Box<dyn std::error::Error>> {
    /// let grant = gateway
    ///     .verify_code(PurposeKind::AccountActivation, "an.nguyen@example.com", "482913")
    ///     .await?;
    /// if let Some((access, _refresh)) = grant.session_pair() {
    ///     println!("activated, access token: {access}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn verify_code(
        &self,
        kind: PurposeKind,
        subject: &str,
        code: &str,
    ) -> ClientResult<SessionGrant>;

    /// Submit a verification code together with the pending profile draft
    ///
    /// The server checks the code and applies the draft in one step; there
    /// is no window where the code is consumed but the changes are not.
    async fn submit_profile_update(
        &self,
        subject: &str,
        code: &str,
        draft: &ProfileDraft,
    ) -> ClientResult<()>;

    /// Create a dormant account and dispatch an activation code
    async fn register(&self, registration: &Registration) -> ClientResult<CodeIssued>;

    /// Exchange credentials for a session pair
    async fn login(&self, email: &str, password: &str) -> ClientResult<SessionGrant>;

    /// Exchange a refresh token for a fresh session pair
    async fn refresh_session(&self, refresh_token: &str) -> ClientResult<SessionGrant>;

    /// Set a new password, authorized by a recovery ticket
    ///
    /// The ticket comes from a completed password-recovery verification.
    async fn reset_password(
        &self,
        subject: &str,
        ticket: &str,
        new_password: &str,
    ) -> ClientResult<()>;

    /// Revoke the session on the server
    async fn logout(&self, access_token: &str) -> ClientResult<()>;
}

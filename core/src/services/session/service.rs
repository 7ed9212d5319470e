//! Session lifecycle: startup routing, sign-in, sign-up and sign-out

use std::sync::Arc;

use em_shared::utils::email::{is_valid_email, mask_email, normalize_email};
use em_shared::utils::validation::validators;

use crate::domain::entities::challenge::PurposeKind;
use crate::domain::value_objects::{CodeIssued, Registration, SessionGrant};
use crate::errors::{ClientError, ClientResult, ValidationError};
use crate::gateways::{CredentialKey, CredentialStore, IdentityGateway, Route};

use super::config::SessionConfig;

/// Service owning the stored session and the account-level flows around it.
///
/// Verification challenges (activation, recovery, profile changes) are driven
/// by [`VerificationController`](crate::services::verification::VerificationController);
/// this service covers everything before and after a challenge: deciding the
/// startup route, signing in and out, and finishing a password reset with the
/// ticket a recovery challenge left behind.
pub struct SessionService<G, C>
where
    G: IdentityGateway,
    C: CredentialStore,
{
    /// Remote identity service
    gateway: Arc<G>,
    /// On-device credential store
    credentials: Arc<C>,
    /// Service configuration
    config: SessionConfig,
}

impl<G, C> SessionService<G, C>
where
    G: IdentityGateway,
    C: CredentialStore,
{
    /// Create a new session service
    pub fn new(gateway: Arc<G>, credentials: Arc<C>, config: SessionConfig) -> Self {
        Self {
            gateway,
            credentials,
            config,
        }
    }

    /// Decide the startup route from the stored credentials.
    ///
    /// An access token on the device sends the user straight to home. With
    /// only a refresh token the session is renewed first; if the renewal is
    /// refused the stale token is dropped. Never fails: storage faults are
    /// logged and treated as a signed-out start.
    pub async fn bootstrap(&self) -> Route {
        // Step 1: An access token on the device means an open session
        match self.credentials.get(CredentialKey::AccessToken).await {
            Ok(Some(_)) => {
                tracing::info!(event = "session_restored", "Found stored access token");
                return Route::Home;
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    event = "bootstrap_storage_failed",
                    "Could not read stored credentials; starting signed out"
                );
                return Route::Login;
            }
        }

        // Step 2: Fall back to the refresh token
        let refresh = match self.credentials.get(CredentialKey::RefreshToken).await {
            Ok(Some(token)) => token,
            Ok(None) => return Route::Login,
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    event = "bootstrap_storage_failed",
                    "Could not read stored credentials; starting signed out"
                );
                return Route::Login;
            }
        };

        // Step 3: Renew the session with the identity service
        match self.gateway.refresh_session(&refresh).await {
            Ok(grant) => match self.persist_grant(&grant).await {
                Ok(()) => {
                    tracing::info!(event = "session_renewed", "Refreshed session at startup");
                    Route::Home
                }
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        event = "session_renewal_failed",
                        "Could not store the renewed session"
                    );
                    Route::Login
                }
            },
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    event = "session_renewal_failed",
                    "Refresh token was refused; dropping it"
                );
                let _ = self.credentials.remove(CredentialKey::RefreshToken).await;
                Route::Login
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// The session tokens are persisted on success; callers only need to
    /// navigate. Local validation failures surface as
    /// [`ClientError::Validation`] without touching the network.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        let email = normalize_email(email);
        self.check_email(&email)?;
        self.check_password(password)?;

        let grant = self.gateway.login(&email, password).await?;
        self.persist_grant(&grant).await?;

        tracing::info!(
            email = %mask_email(&email),
            event = "login_succeeded",
            "Signed in"
        );
        Ok(())
    }

    /// Create an account.
    ///
    /// The identity service dispatches an activation code to the address as a
    /// side effect; the caller is expected to open an account-activation
    /// challenge next.
    pub async fn register(&self, registration: &Registration) -> ClientResult<CodeIssued> {
        let email = normalize_email(&registration.email);
        self.check_email(&email)?;
        self.check_password(&registration.password)?;
        if !validators::not_empty(&registration.full_name) {
            return Err(ValidationError::RequiredField {
                field: "full_name".to_string(),
            }
            .into());
        }

        let registration = Registration {
            email: email.clone(),
            ..registration.clone()
        };
        let issued = self.gateway.register(&registration).await?;

        tracing::info!(
            email = %mask_email(&email),
            event = "registration_accepted",
            "Account created, activation code dispatched"
        );
        Ok(issued)
    }

    /// Ask the identity service to send a password-recovery code.
    pub async fn request_recovery(&self, email: &str) -> ClientResult<CodeIssued> {
        let email = normalize_email(email);
        self.check_email(&email)?;
        self.gateway
            .issue_code(PurposeKind::PasswordRecovery, &email)
            .await
    }

    /// Set a new password using the recovery ticket stored by a completed
    /// recovery challenge. The ticket is removed once the server accepts.
    pub async fn complete_password_reset(
        &self,
        email: &str,
        new_password: &str,
    ) -> ClientResult<()> {
        let email = normalize_email(email);
        self.check_email(&email)?;
        self.check_password(new_password)?;

        let ticket = self
            .credentials
            .get(CredentialKey::RecoveryTicket)
            .await?
            .ok_or_else(|| ClientError::internal("no recovery ticket on this device"))?;

        self.gateway
            .reset_password(&email, &ticket, new_password)
            .await?;
        self.credentials.remove(CredentialKey::RecoveryTicket).await?;

        tracing::info!(
            email = %mask_email(&email),
            event = "password_reset",
            "Password changed"
        );
        Ok(())
    }

    /// Sign out.
    ///
    /// Remote revocation is best effort; the device is wiped even when the
    /// identity service cannot be reached.
    pub async fn logout(&self) -> ClientResult<()> {
        if let Ok(Some(access)) = self.credentials.get(CredentialKey::AccessToken).await {
            if let Err(error) = self.gateway.logout(&access).await {
                tracing::warn!(
                    error = %error,
                    event = "logout_revocation_failed",
                    "Remote sign-out failed; clearing the device anyway"
                );
            }
        }
        self.credentials.clear_all().await?;
        tracing::info!(event = "logged_out", "Cleared stored credentials");
        Ok(())
    }

    /// Record the device's push messaging token.
    pub async fn update_push_token(&self, token: &str) -> ClientResult<()> {
        self.credentials.set(CredentialKey::PushToken, token).await
    }

    /// Store both tokens from a session grant.
    async fn persist_grant(&self, grant: &SessionGrant) -> ClientResult<()> {
        let (access, refresh) = grant
            .session_pair()
            .ok_or_else(|| ClientError::network("session grant is missing tokens"))?;
        self.credentials
            .set(CredentialKey::AccessToken, access)
            .await?;
        self.credentials
            .set(CredentialKey::RefreshToken, refresh)
            .await?;
        Ok(())
    }

    fn check_email(&self, email: &str) -> ClientResult<()> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        Ok(())
    }

    fn check_password(&self, password: &str) -> ClientResult<()> {
        // Both bounds count characters, matching what the error reports.
        let length = password.chars().count();
        if length < self.config.password_min_length {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.password_min_length,
            }
            .into());
        }
        if length > self.config.password_max_length {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                expected: self.config.password_max_length,
                actual: length,
            }
            .into());
        }
        Ok(())
    }
}

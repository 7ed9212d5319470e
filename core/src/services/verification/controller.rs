//! Verification session controller
//!
//! Drives one OTP challenge end to end: code input, auto-submission at
//! full length, the purpose-specific success action, and the resend
//! sub-flow. One controller instance backs one verification screen.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use em_shared::utils::email::mask_email;

use crate::domain::entities::challenge::{
    AttemptState, CodeEdit, FailureKind, PurposeKind, VerificationChallenge, VerificationPurpose,
};
use crate::errors::{ClientError, ClientResult};
use crate::gateways::{
    CredentialKey, CredentialStore, IdentityGateway, Navigator, Route, RouteParams,
};

use super::config::VerificationConfig;
use super::messages;
use super::types::{ChallengeSnapshot, EditOutcome, ResendOutcome, SubmitOutcome};

/// Side effect to run after the server accepts a code
enum SuccessAction {
    /// Session persisted; enter the storefront
    EnterHome,
    /// Recovery ticket persisted; continue to the reset form
    OpenReset { ticket: String },
    /// Profile changes applied; return to the previous screen
    ReturnBack,
}

/// Controller for one verification challenge
///
/// All methods take `&self`; the challenge lives behind a lock so the UI
/// may call in from wherever events arrive. The lock is never held across
/// remote calls. Moving to `Submitting` before any I/O starts is what
/// keeps a second call from launching while one is in flight.
pub struct VerificationController<G, C, N>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    /// Remote identity service
    gateway: Arc<G>,
    /// On-device credential store
    credentials: Arc<C>,
    /// Navigation authority of the shell
    navigator: Arc<N>,
    /// Controller configuration
    config: VerificationConfig,
    /// The challenge being driven
    challenge: Mutex<VerificationChallenge>,
}

impl<G, C, N> VerificationController<G, C, N>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    /// Create a controller for a fresh challenge
    ///
    /// The flow that opens the verification screen has already asked the
    /// server to dispatch a code, so the resend gate starts closed.
    ///
    /// # Arguments
    ///
    /// * `subject` - Email address the code was sent to
    /// * `purpose` - Business purpose, with payload for profile updates
    /// * `gateway` - Identity service implementation
    /// * `credentials` - Credential store implementation
    /// * `navigator` - Navigation authority
    /// * `config` - Controller configuration
    pub fn new(
        subject: String,
        purpose: VerificationPurpose,
        gateway: Arc<G>,
        credentials: Arc<C>,
        navigator: Arc<N>,
        config: VerificationConfig,
    ) -> Self {
        let challenge = VerificationChallenge::new(
            subject,
            purpose,
            Duration::seconds(config.resend_cooldown_seconds),
        );

        tracing::debug!(
            subject = %mask_email(&challenge.subject),
            purpose = challenge.purpose.kind().as_str(),
            challenge_id = %challenge.id,
            event = "challenge_opened",
            "Opened verification challenge"
        );

        Self {
            gateway,
            credentials,
            navigator,
            config,
            challenge: Mutex::new(challenge),
        }
    }

    /// Apply an input edit; submits automatically at full length
    ///
    /// This method:
    /// 1. Normalizes the input into the code buffer
    /// 2. Returns early unless the code just became complete
    /// 3. Moves the challenge to `Submitting` and runs the remote call
    /// 4. Runs the purpose-specific success action, or collapses the
    ///    error into a failure with a user-facing message
    /// 5. Emits the navigation signal on success
    pub async fn edit_code(&self, input: &str) -> EditOutcome {
        let (purpose, subject, code) = {
            let mut challenge = self.challenge.lock().await;
            match challenge.edit_code(input) {
                CodeEdit::Ignored => return EditOutcome::Ignored,
                CodeEdit::Partial => return EditOutcome::Pending,
                CodeEdit::Complete => {}
            }
            // A complete edit on an accepting challenge always submits
            if !challenge.begin_submission() {
                return EditOutcome::Ignored;
            }
            (
                challenge.purpose.clone(),
                challenge.subject.clone(),
                challenge.code.clone(),
            )
        };

        let kind = purpose.kind();
        tracing::info!(
            subject = %mask_email(&subject),
            purpose = kind.as_str(),
            event = "code_submitted",
            "Submitting verification code"
        );

        let result = self.run_success_path(&purpose, &subject, &code).await;

        let mut challenge = self.challenge.lock().await;
        match result {
            Ok(action) => {
                challenge.complete_success();
                drop(challenge);

                tracing::info!(
                    subject = %mask_email(&subject),
                    purpose = kind.as_str(),
                    event = "verification_succeeded",
                    "Verification challenge succeeded"
                );
                self.navigate(action, &subject);
                EditOutcome::Submitted(SubmitOutcome::Succeeded)
            }
            Err(error) => {
                let failure = FailureKind::from(&error);
                let message = messages::display_message(
                    &error,
                    messages::submit_fallback(self.config.language, failure),
                );
                tracing::warn!(
                    subject = %mask_email(&subject),
                    purpose = kind.as_str(),
                    failure = ?failure,
                    error = %error,
                    event = "verification_failed",
                    "Verification attempt failed"
                );
                challenge.complete_failure(failure, message);
                EditOutcome::Submitted(SubmitOutcome::Failed(failure))
            }
        }
    }

    /// Ask the server for a fresh code
    ///
    /// Refused while a call is in flight or after success; gated by the
    /// resend cooldown. A failed resend leaves the challenge exactly as
    /// it was, with an updated message.
    pub async fn request_resend(&self) -> ResendOutcome {
        let (prior, kind, subject) = {
            let mut challenge = self.challenge.lock().await;
            if challenge.attempt_state.is_submitting() || challenge.attempt_state.is_succeeded() {
                return ResendOutcome::Ignored;
            }
            let wait = challenge.resend_wait_seconds(Utc::now());
            if wait > 0 {
                return ResendOutcome::CoolingDown { retry_in_seconds: wait };
            }
            let prior = challenge.attempt_state;
            challenge.begin_resend();
            (prior, challenge.purpose.kind(), challenge.subject.clone())
        };

        tracing::info!(
            subject = %mask_email(&subject),
            purpose = kind.as_str(),
            event = "code_resend_requested",
            "Requesting a fresh verification code"
        );

        let result = self.gateway.issue_code(kind, &subject).await;

        let mut challenge = self.challenge.lock().await;
        match result {
            Ok(_ack) => {
                challenge.resend_succeeded(Duration::seconds(self.config.resend_cooldown_seconds));
                tracing::info!(
                    subject = %mask_email(&subject),
                    purpose = kind.as_str(),
                    event = "code_resent",
                    "Fresh verification code dispatched"
                );
                ResendOutcome::Sent
            }
            Err(error) => {
                let failure = FailureKind::from(&error);
                let message = messages::display_message(
                    &error,
                    messages::resend_fallback(self.config.language, failure),
                );
                tracing::warn!(
                    subject = %mask_email(&subject),
                    purpose = kind.as_str(),
                    error = %error,
                    event = "code_resend_failed",
                    "Resend request failed"
                );
                challenge.resend_failed(prior, message);
                ResendOutcome::Failed(failure)
            }
        }
    }

    /// Whether the challenge has reached its terminal success state
    pub async fn is_complete(&self) -> bool {
        self.challenge.lock().await.attempt_state == AttemptState::Succeeded
    }

    /// Current view of the challenge, for rendering
    pub async fn snapshot(&self) -> ChallengeSnapshot {
        let challenge = self.challenge.lock().await;
        ChallengeSnapshot {
            subject: challenge.subject.clone(),
            kind: challenge.purpose.kind(),
            code: challenge.code.clone(),
            state: challenge.attempt_state,
            last_error: challenge.last_error.clone(),
            resend_wait_seconds: challenge.resend_wait_seconds(Utc::now()),
        }
    }

    /// Remote call plus credential writes for the given purpose
    ///
    /// Runs while the challenge is `Submitting`. Any error, remote or
    /// local, collapses into the same failure handling; the challenge is
    /// only marked succeeded after everything here lands.
    async fn run_success_path(
        &self,
        purpose: &VerificationPurpose,
        subject: &str,
        code: &str,
    ) -> ClientResult<SuccessAction> {
        match purpose {
            VerificationPurpose::AccountActivation => {
                let grant = self
                    .gateway
                    .verify_code(PurposeKind::AccountActivation, subject, code)
                    .await?;
                let (access, refresh) = grant
                    .session_pair()
                    .ok_or_else(|| ClientError::network("session grant missing tokens"))?;
                self.credentials.set(CredentialKey::AccessToken, access).await?;
                self.credentials.set(CredentialKey::RefreshToken, refresh).await?;
                Ok(SuccessAction::EnterHome)
            }
            VerificationPurpose::PasswordRecovery => {
                let grant = self
                    .gateway
                    .verify_code(PurposeKind::PasswordRecovery, subject, code)
                    .await?;
                // The validated code doubles as the ticket on older
                // backend versions that send no reset token.
                let ticket = grant.reset_token.unwrap_or_else(|| code.to_string());
                self.credentials.set(CredentialKey::RecoveryTicket, &ticket).await?;
                Ok(SuccessAction::OpenReset { ticket })
            }
            VerificationPurpose::ProfileUpdate(draft) => {
                self.gateway.submit_profile_update(subject, code, draft).await?;
                Ok(SuccessAction::ReturnBack)
            }
        }
    }

    /// Emit the navigation signal for a completed challenge
    fn navigate(&self, action: SuccessAction, subject: &str) {
        match action {
            SuccessAction::EnterHome => self.navigator.replace(Route::Home),
            SuccessAction::OpenReset { ticket } => self.navigator.navigate_to(
                Route::ResetPassword,
                RouteParams::new().with("subject", subject).with("ticket", ticket),
            ),
            SuccessAction::ReturnBack => self.navigator.go_back(),
        }
    }
}

impl<G, C, N> std::fmt::Debug for VerificationController<G, C, N>
where
    G: IdentityGateway,
    C: CredentialStore,
    N: Navigator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//! Verification challenge entity for OTP-based identity checks.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::profile::ProfileDraft;
use crate::errors::ClientError;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Business purpose behind a verification challenge
///
/// The purpose decides which remote call carries the code and what happens
/// after the server accepts it. Profile updates travel with the pending
/// draft so the confirmed changes can be submitted in the same call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VerificationPurpose {
    /// Confirm a freshly registered account
    AccountActivation,
    /// Prove account ownership before a password reset
    PasswordRecovery,
    /// Confirm pending profile changes before they are applied
    ProfileUpdate(ProfileDraft),
}

impl VerificationPurpose {
    /// Copyable discriminant of this purpose
    pub fn kind(&self) -> PurposeKind {
        match self {
            VerificationPurpose::AccountActivation => PurposeKind::AccountActivation,
            VerificationPurpose::PasswordRecovery => PurposeKind::PasswordRecovery,
            VerificationPurpose::ProfileUpdate(_) => PurposeKind::ProfileUpdate,
        }
    }
}

/// Discriminant of `VerificationPurpose`, used for routing and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurposeKind {
    AccountActivation,
    PasswordRecovery,
    ProfileUpdate,
}

impl PurposeKind {
    /// Stable name used in endpoint paths and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PurposeKind::AccountActivation => "account_activation",
            PurposeKind::PasswordRecovery => "password_recovery",
            PurposeKind::ProfileUpdate => "profile_update",
        }
    }
}

/// Failure class of the most recent attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input failed a local check before any remote call
    Validation,
    /// The server answered and refused the code
    Rejected,
    /// The call never completed or the reply was unusable
    Network,
    /// A client-side step broke after the server had accepted
    Internal,
}

impl From<&ClientError> for FailureKind {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Validation(_) => FailureKind::Validation,
            ClientError::Rejected { .. } => FailureKind::Rejected,
            ClientError::Network { .. } => FailureKind::Network,
            ClientError::Storage { .. } | ClientError::Internal { .. } => FailureKind::Internal,
        }
    }
}

/// Submission state of a challenge
///
/// `Submitting` covers exactly the window where a remote call is in flight,
/// for code submission and resend alike. Entering it synchronously before
/// the call starts is what keeps a second submission from ever launching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    /// Waiting for input
    Idle,
    /// A remote call is in flight
    Submitting,
    /// The last attempt failed; input is accepted again
    Failed(FailureKind),
    /// The challenge is complete; terminal
    Succeeded,
}

impl AttemptState {
    /// Whether a remote call is currently in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self, AttemptState::Submitting)
    }

    /// Whether the challenge finished successfully
    pub fn is_succeeded(&self) -> bool {
        matches!(self, AttemptState::Succeeded)
    }

    /// Whether the last attempt failed
    pub fn is_failed(&self) -> bool {
        matches!(self, AttemptState::Failed(_))
    }

    /// Whether code input is currently accepted
    pub fn accepts_input(&self) -> bool {
        matches!(self, AttemptState::Idle | AttemptState::Failed(_))
    }
}

/// Effect of applying an input edit to the code buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeEdit {
    /// Input ignored: challenge busy, already succeeded, or no effective change
    Ignored,
    /// Buffer updated, code still incomplete
    Partial,
    /// Buffer updated and the code is complete
    Complete,
}

/// Verification challenge entity driving one OTP exchange
///
/// One instance lives for the duration of a verification screen. All
/// transitions are synchronous; the controller owns the surrounding I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationChallenge {
    /// Unique identifier of this challenge instance
    pub id: Uuid,

    /// Email address the challenge was issued for
    pub subject: String,

    /// Why this challenge exists
    pub purpose: VerificationPurpose,

    /// Digits entered so far (at most `CODE_LENGTH`)
    pub code: String,

    /// Current submission state
    pub attempt_state: AttemptState,

    /// User-facing message from the most recent failure
    pub last_error: Option<String>,

    /// Earliest instant a resend may be requested
    pub resend_available_at: DateTime<Utc>,

    /// Timestamp when the challenge was created
    pub created_at: DateTime<Utc>,
}

impl VerificationChallenge {
    /// Creates a new idle challenge
    ///
    /// A code was already dispatched by whichever flow opened the screen,
    /// so the resend window starts closed for one full cooldown.
    ///
    /// # Arguments
    ///
    /// * `subject` - Email address the code was sent to
    /// * `purpose` - Business purpose of the challenge
    /// * `resend_cooldown` - Time until the first resend becomes available
    pub fn new(subject: String, purpose: VerificationPurpose, resend_cooldown: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject,
            purpose,
            code: String::new(),
            attempt_state: AttemptState::Idle,
            last_error: None,
            resend_available_at: now + resend_cooldown,
            created_at: now,
        }
    }

    /// Applies an input edit to the code buffer
    ///
    /// Non-digits are dropped and the result is clipped to `CODE_LENGTH`.
    /// A change clears `last_error` and moves a failed challenge back to
    /// idle. Input is ignored while a call is in flight or after success.
    ///
    /// # Returns
    ///
    /// What happened to the buffer, so the caller knows whether the code
    /// is now complete and ready to submit.
    pub fn edit_code(&mut self, input: &str) -> CodeEdit {
        if !self.attempt_state.accepts_input() {
            return CodeEdit::Ignored;
        }

        let normalized = Self::normalize(input);
        if normalized == self.code {
            return CodeEdit::Ignored;
        }

        self.code = normalized;
        self.last_error = None;
        if self.attempt_state.is_failed() {
            self.attempt_state = AttemptState::Idle;
        }

        if self.code.len() == CODE_LENGTH {
            CodeEdit::Complete
        } else {
            CodeEdit::Partial
        }
    }

    /// Moves the challenge into `Submitting` for a code submission
    ///
    /// Refuses unless input is currently accepted and the code is complete.
    /// The transition happens before any I/O, which is what guarantees at
    /// most one submission in flight per challenge.
    ///
    /// # Returns
    ///
    /// `true` if the challenge is now submitting
    pub fn begin_submission(&mut self) -> bool {
        if !self.attempt_state.accepts_input() || self.code.len() != CODE_LENGTH {
            return false;
        }
        self.attempt_state = AttemptState::Submitting;
        true
    }

    /// Marks the in-flight submission as accepted; terminal
    pub fn complete_success(&mut self) {
        self.attempt_state = AttemptState::Succeeded;
        self.last_error = None;
    }

    /// Marks the in-flight submission as failed
    ///
    /// The code buffer resets so the user re-enters from scratch, and the
    /// message is kept for display until the next edit or resend.
    pub fn complete_failure(&mut self, kind: FailureKind, message: String) {
        self.attempt_state = AttemptState::Failed(kind);
        self.code.clear();
        self.last_error = Some(message);
    }

    /// Moves the challenge into `Submitting` for a resend request
    ///
    /// The caller captures the prior state first; a failed resend restores
    /// it via [`resend_failed`](Self::resend_failed).
    pub fn begin_resend(&mut self) {
        self.attempt_state = AttemptState::Submitting;
        self.last_error = None;
    }

    /// Marks the in-flight resend as delivered
    ///
    /// The buffer and any stale failure are cleared and a fresh cooldown
    /// window opens.
    pub fn resend_succeeded(&mut self, resend_cooldown: Duration) {
        self.code.clear();
        self.last_error = None;
        self.attempt_state = AttemptState::Idle;
        self.resend_available_at = Utc::now() + resend_cooldown;
    }

    /// Marks the in-flight resend as failed, restoring the prior state
    pub fn resend_failed(&mut self, prior: AttemptState, message: String) {
        self.attempt_state = prior;
        self.last_error = Some(message);
    }

    /// Seconds until the resend gate opens; zero when it is already open
    pub fn resend_wait_seconds(&self, now: DateTime<Utc>) -> i64 {
        let remaining = self.resend_available_at - now;
        if remaining <= Duration::zero() {
            0
        } else {
            remaining.num_seconds().max(1)
        }
    }

    /// Keeps only ASCII digits and clips to `CODE_LENGTH`
    fn normalize(input: &str) -> String {
        input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CODE_LENGTH)
            .collect()
    }
}

//! Types for verification controller results

use crate::domain::entities::challenge::{AttemptState, FailureKind, PurposeKind};

/// What an input edit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Input not applied: a call is in flight, the challenge already
    /// succeeded, or the edit changed nothing
    Ignored,
    /// Buffer updated; waiting for more digits
    Pending,
    /// The code reached full length and was submitted
    Submitted(SubmitOutcome),
}

/// Terminal result of one auto-submitted attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the code and the success action completed
    Succeeded,
    /// The attempt collapsed into a failure; message on the snapshot
    Failed(FailureKind),
}

/// Result of a resend request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendOutcome {
    /// A fresh code is on its way
    Sent,
    /// The request failed; the challenge keeps its prior state
    Failed(FailureKind),
    /// The cooldown gate is still closed
    CoolingDown { retry_in_seconds: i64 },
    /// A call is in flight or the challenge already succeeded
    Ignored,
}

/// Point-in-time view of a challenge, for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeSnapshot {
    /// Email address the code was sent to
    pub subject: String,
    /// Which verification flow this is
    pub kind: PurposeKind,
    /// Digits entered so far
    pub code: String,
    /// Current submission state
    pub state: AttemptState,
    /// Message from the most recent failure, if any
    pub last_error: Option<String>,
    /// Seconds until a resend is allowed; zero when the gate is open
    pub resend_wait_seconds: i64,
}

//! Verification controller module for OTP-based identity checks
//!
//! This module provides the complete challenge workflow:
//! - Code input with auto-submission at full length
//! - Purpose-specific success actions (activation, recovery, profile)
//! - Resend sub-flow with cooldown gating
//! - Failure collapse into user-facing bilingual messages

mod config;
mod controller;
mod messages;
mod types;


pub use config::VerificationConfig;
pub use controller::VerificationController;
pub use messages::{display_message, resend_fallback, submit_fallback};
pub use types::{ChallengeSnapshot, EditOutcome, ResendOutcome, SubmitOutcome};

//! Client services containing domain logic and use cases.

pub mod app_state;
pub mod session;
pub mod verification;

// Re-export commonly used types
pub use app_state::{CartBadge, NotificationCounter};
pub use session::{SessionConfig, SessionService};
pub use verification::{
    ChallengeSnapshot, EditOutcome, ResendOutcome, SubmitOutcome,
    VerificationConfig, VerificationController,
};

// Placeholder for future service modules
// pub mod catalog;
// pub mod orders;

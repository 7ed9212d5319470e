//! Domain entities representing core business objects.

pub mod challenge;
pub mod profile;

// Placeholder for future entity modules
// pub mod cart_line;
// pub mod order;

// Re-export commonly used types
pub use challenge::{
    AttemptState, CodeEdit, FailureKind, PurposeKind, VerificationChallenge,
    VerificationPurpose, CODE_LENGTH,
};
pub use profile::ProfileDraft;

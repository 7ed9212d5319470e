//! Value objects representing immutable domain concepts.

pub mod registration;
pub mod session_grant;

// Re-export commonly used types
pub use registration::Registration;
pub use session_grant::{CodeIssued, SessionGrant};

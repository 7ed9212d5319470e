//! Type definitions module with domain-specific sub-modules
//!
//! This module organizes types into logical categories:
//! - `language` - Internationalization and language types
//! - `response` - Wire envelope for the storefront API

pub mod language;
pub mod response;

// Re-export commonly used types at module level
pub use language::Language;
pub use response::{ApiEnvelope, STATUS_OK};

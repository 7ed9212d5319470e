//! Shared utilities and common types for the EasyMart client
//!
//! This crate provides common functionality used across all client modules:
//! - Configuration types
//! - Wire response envelope
//! - Utility functions (email validation, masking, etc.)
//! - Language handling

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, AuthConfig, Environment, LoggingConfig, StorageConfig,
};
pub use types::{ApiEnvelope, Language};
pub use utils::validation;

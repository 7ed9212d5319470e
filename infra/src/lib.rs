//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the EasyMart client,
//! following Clean Architecture principles. It provides concrete
//! implementations of the gateway traits the core defines.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **HTTP**: `reqwest` client speaking the storefront's JSON envelope
//!   protocol, and the identity gateway built on it
//! - **Store**: file-backed credential store for platforms without a
//!   native keychain bridge
//! - **Push**: background listener draining a platform push feed into the
//!   shared notification counter
//!
//! Navigation has no implementation here: each platform shell passes its
//! own `Navigator` when the app context is assembled.

// Re-export core types for convenience
pub use em_core::errors::*;

/// HTTP module - storefront API client and identity gateway
pub mod http;

/// Push module - notification feed listener
pub mod push;

/// Store module - on-device credential persistence
pub mod store;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfraError> for ClientError {
    fn from(error: InfraError) -> Self {
        ClientError::internal(error.to_string())
    }
}

//! # EasyMart Core
//!
//! Core client logic and domain layer for the EasyMart mobile storefront.
//! This crate contains domain entities, client services, gateway interfaces,
//! and error types shared by every platform shell.

pub mod domain;
pub mod errors;
pub mod gateways;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use gateways::*;
pub use services::*;

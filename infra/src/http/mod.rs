//! HTTP Module
//!
//! `reqwest`-based client for the storefront identity endpoints.
//!
//! ## Features
//!
//! - **Envelope Protocol**: every response arrives as `{statusCode,
//!   message, data}`; protocol handling lives in [`ApiClient`]
//! - **Identity Gateway**: [`HttpIdentityGateway`] implements the core's
//!   `IdentityGateway` trait on top of the client
//! - **Local Validation**: requests are checked before anything is sent
//! - **Security**: email addresses are masked in logs

pub mod api_client;
pub mod dto;
pub mod identity_gateway;

// Re-export commonly used types
pub use api_client::ApiClient;
pub use identity_gateway::HttpIdentityGateway;

#[cfg(test)]
mod tests;

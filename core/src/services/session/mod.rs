//! Session service module
//!
//! Owns the stored session and the flows around it: startup routing,
//! sign-in, sign-up, password reset completion and sign-out.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SessionConfig;
pub use service::SessionService;

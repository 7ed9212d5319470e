//! # EasyMart Application Shell
//!
//! Assembles the client: loads configuration, wires the gateways to the
//! core services, and exposes the flows a platform shell drives. The
//! binary in this crate is a headless stand-in for those shells, used for
//! smoke-testing config and connectivity.

pub mod bootstrap;
pub mod config;
pub mod context;
pub mod flows;

// Re-export commonly used types
pub use context::{build_live, AppContext, LiveContext};

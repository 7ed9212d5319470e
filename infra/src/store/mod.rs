//! Store Module
//!
//! On-device credential persistence. The core defines the `CredentialStore`
//! trait; this module ships the file-backed implementation used where no
//! platform keychain is available.

pub mod file_store;

// Re-export commonly used types
pub use file_store::FileCredentialStore;

#[cfg(test)]
mod tests;

//! User flows built from the core services
//!
//! Each flow pairs the remote call that dispatches a verification code
//! with the controller that drives the rest of the challenge. Shells call
//! a `begin_*` function from a form submit and hold onto the returned
//! controller until the challenge completes.

pub mod activation;
pub mod profile;
pub mod recovery;

pub use activation::register_and_begin;
pub use profile::begin_profile_update;
pub use recovery::begin_recovery;

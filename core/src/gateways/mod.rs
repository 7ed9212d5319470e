//! Gateway traits: seams between the client core and the outside world.
//!
//! Three collaborators sit behind these traits:
//! - `identity` - the remote identity service (HTTPS/JSON)
//! - `credentials` - the on-device secret store
//! - `navigation` - the UI shell's navigation authority

pub mod credentials;
pub mod identity;
pub mod navigation;

pub use credentials::{CredentialKey, CredentialStore, MemoryCredentialStore};
pub use identity::IdentityGateway;
pub use navigation::{NavEvent, Navigator, RecordingNavigator, Route, RouteParams};

#[cfg(test)]
pub use identity::{MockIdentityGateway, RecordedCall};

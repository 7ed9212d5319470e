//! Identity service gateway module.

pub mod r#trait;
pub use r#trait::IdentityGateway;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::{MockIdentityGateway, RecordedCall};

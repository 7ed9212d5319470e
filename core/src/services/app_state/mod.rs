//! Shared observable UI state
//!
//! Small thread-safe holders the storefront shell watches: the cart badge
//! and the unread-notification count. Both sit on `tokio::sync::watch`
//! channels so any number of views can subscribe.

mod cart;
mod notifications;

pub use cart::CartBadge;
pub use notifications::NotificationCounter;

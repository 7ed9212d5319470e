//! Push Module
//!
//! Background listener translating platform push events into observable
//! state changes on the shared notification counter.

pub mod listener;

// Re-export commonly used types
pub use listener::{
    ChannelNotificationFeed, ListenerHandle, NotificationEvent, NotificationFeed,
    NotificationListener,
};

//! Observable unread-notification count

use tokio::sync::watch;

/// Shared unread-notification state.
///
/// Incoming push messages bump the count one at a time; a badge sync from the
/// server replaces it outright. Reading the notification list marks
/// everything read.
#[derive(Debug)]
pub struct NotificationCounter {
    state: watch::Sender<u32>,
}

impl Default for NotificationCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCounter {
    /// Create a counter with nothing unread
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { state: sender }
    }

    /// Current unread count
    pub fn unread(&self) -> u32 {
        *self.state.borrow()
    }

    /// Replace the count with the server's authoritative value
    pub fn set_unread(&self, count: u32) {
        self.state.send_replace(count);
    }

    /// Count one newly arrived notification
    pub fn record_incoming(&self) {
        self.state
            .send_modify(|count| *count = count.saturating_add(1));
    }

    /// Mark every notification read
    pub fn mark_all_read(&self) {
        self.state.send_replace(0);
    }

    /// Subscribe to count changes
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.state.subscribe()
    }
}

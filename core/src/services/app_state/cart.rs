//! Observable cart badge count

use tokio::sync::watch;

/// Shared cart badge state.
///
/// UI shells subscribe through [`CartBadge::subscribe`] and re-render the
/// badge whenever the count changes. Updates never fail, even with no
/// subscriber attached.
#[derive(Debug)]
pub struct CartBadge {
    state: watch::Sender<u32>,
}

impl Default for CartBadge {
    fn default() -> Self {
        Self::new()
    }
}

impl CartBadge {
    /// Create an empty badge
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { state: sender }
    }

    /// Current number of items in the cart
    pub fn count(&self) -> u32 {
        *self.state.borrow()
    }

    /// Replace the count, e.g. after the cart was fetched from the server
    pub fn set_count(&self, count: u32) {
        self.state.send_replace(count);
    }

    /// Add items to the badge after an "add to cart" action
    pub fn add(&self, quantity: u32) {
        self.state
            .send_modify(|count| *count = count.saturating_add(quantity));
    }

    /// Empty the badge, e.g. after checkout
    pub fn clear(&self) {
        self.state.send_replace(0);
    }

    /// Subscribe to count changes
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.state.subscribe()
    }
}

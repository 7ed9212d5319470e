//! Push feed listener
//!
//! Drains a platform push feed in the background and keeps the shared
//! notification counter current. The feed itself is a trait so each shell
//! can plug in its own bridge (FCM on Android, APNs on iOS); desktop builds
//! and tests use the channel-backed feed.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use em_core::services::app_state::NotificationCounter;

/// A single event from the push channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// Absolute unread count pushed by the server
    BadgeSync(u32),
    /// One new notification arrived
    Incoming,
}

/// Source of push events
///
/// `None` means the feed closed and the listener should wind down.
#[async_trait]
pub trait NotificationFeed: Send {
    async fn next_event(&mut self) -> Option<NotificationEvent>;
}

/// Feed backed by an in-process channel
pub struct ChannelNotificationFeed {
    receiver: mpsc::Receiver<NotificationEvent>,
}

impl ChannelNotificationFeed {
    /// Create a feed and the sender that drives it
    pub fn new(capacity: usize) -> (mpsc::Sender<NotificationEvent>, Self) {
        let (sender, receiver) = mpsc::channel(capacity);
        (sender, Self { receiver })
    }
}

#[async_trait]
impl NotificationFeed for ChannelNotificationFeed {
    async fn next_event(&mut self) -> Option<NotificationEvent> {
        self.receiver.recv().await
    }
}

/// Handle to a running listener
///
/// Dropping the handle also stops the listener; `stop` additionally waits
/// for the task to finish.
pub struct ListenerHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ListenerHandle {
    /// Stop the listener and wait for it to wind down
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}

/// Background task keeping the notification counter in sync with a feed
pub struct NotificationListener;

impl NotificationListener {
    /// Spawn the listener on the current runtime
    pub fn spawn<F>(mut feed: F, counter: Arc<NotificationCounter>) -> ListenerHandle
    where
        F: NotificationFeed + 'static,
    {
        let (shutdown, mut stop) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            info!(event = "push_listener_started", "Listening for push events");
            loop {
                tokio::select! {
                    _ = &mut stop => break,
                    event = feed.next_event() => match event {
                        Some(NotificationEvent::BadgeSync(count)) => {
                            debug!(count, "Badge sync from server");
                            counter.set_unread(count);
                        }
                        Some(NotificationEvent::Incoming) => {
                            counter.record_incoming();
                        }
                        None => break,
                    },
                }
            }
            info!(event = "push_listener_stopped", "Push listener wound down");
        });

        ListenerHandle { shutdown, task }
    }
}

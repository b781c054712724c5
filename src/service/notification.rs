//! Best-effort delivery of login notifications to the Discord log channel.
//!
//! The HTTP handlers never touch the bot session directly. They hand the
//! rendered message to a bounded queue, and a notifier task spawned at
//! startup owns the Discord HTTP client and the destination channel id.
//! Delivery failure of any kind (unknown channel, send error, full queue,
//! stopped notifier) is logged and swallowed so it can never change the
//! outcome of the login request that triggered it.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateMessage};
use serenity::http::Http;
use tokio::sync::mpsc;

/// Bounded queue depth for pending notifications. Logins are rare enough
/// that a full queue means Discord is unreachable, in which case dropping
/// is the right behavior anyway.
const QUEUE_DEPTH: usize = 32;

/// Handle for dispatching login notifications to the log channel.
///
/// Cheap to clone (wraps an mpsc sender); one copy lives in the shared
/// application state.
#[derive(Clone)]
pub struct NotificationService {
    tx: mpsc::Sender<String>,
}

impl NotificationService {
    /// Wraps an existing sender. Used directly by tests that want to observe
    /// what would be posted; production code goes through [`Self::spawn`].
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }

    /// Spawns the notifier task and returns the dispatch handle.
    ///
    /// The task owns the serenity HTTP client and runs until every sender is
    /// dropped, posting each queued message to the configured channel.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client shared with the bot session
    /// - `log_channel_id` - Channel that receives the notifications
    pub fn spawn(http: Arc<Http>, log_channel_id: u64) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);

        tokio::spawn(run_notifier(http, ChannelId::new(log_channel_id), rx));

        Self::new(tx)
    }

    /// Queues a message for delivery to the log channel.
    ///
    /// Never blocks and never fails from the caller's point of view: if the
    /// queue is full or the notifier task is gone, the message is dropped
    /// with a warning.
    pub fn notify(&self, content: String) {
        if let Err(e) = self.tx.try_send(content) {
            tracing::warn!("Dropping login notification: {}", e);
        }
    }
}

async fn run_notifier(http: Arc<Http>, channel_id: ChannelId, mut rx: mpsc::Receiver<String>) {
    while let Some(content) = rx.recv().await {
        let message = CreateMessage::new().content(content);

        match channel_id.send_message(&http, message).await {
            Ok(_) => {
                tracing::info!("Posted login notification to channel {}", channel_id);
            }
            Err(e) => {
                tracing::error!(
                    "Failed to post login notification to channel {}: {}",
                    channel_id,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a queued notification reaches the receiving end intact.
    ///
    /// Expected: the rendered message arrives on the queue unchanged
    #[tokio::test]
    async fn delivers_queued_message() {
        let (tx, mut rx) = mpsc::channel(QUEUE_DEPTH);
        let service = NotificationService::new(tx);

        service.notify("**New Authenticated User**".to_string());

        assert_eq!(rx.recv().await.unwrap(), "**New Authenticated User**");
    }

    /// Tests that notifying after the notifier is gone is harmless.
    ///
    /// Verifies the best-effort contract: a dead receiver must not panic or
    /// surface an error to the caller.
    ///
    /// Expected: notify returns normally
    #[tokio::test]
    async fn swallows_send_to_stopped_notifier() {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        drop(rx);
        let service = NotificationService::new(tx);

        service.notify("lost".to_string());
    }
}

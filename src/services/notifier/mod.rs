//! Outbound chat notifications.

pub mod telegram;
pub mod types;

use async_trait::async_trait;

pub use telegram::TelegramNotifier;
pub use types::NotifyError;

/// Destination for bot messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to `chat_id` with a single attempt.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError>;

    /// Best-effort delivery. Failures are logged and dropped.
    async fn notify(&self, chat_id: &str, text: &str) {
        match self.send_message(chat_id, text).await {
            Ok(()) => tracing::debug!(chat_id, text, "message sent"),
            Err(e) => tracing::error!(chat_id, error = %e, "failed to send message"),
        }
    }
}

use thiserror::Error;

/// Errors that can occur when sending a chat message.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bot API answered but refused the message
    #[error("message rejected (status {status}): {description}")]
    Rejected { status: u16, description: String },
}

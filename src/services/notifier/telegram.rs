//! Telegram Bot API channel.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Notifier, NotifyError};

/// Sends messages through `sendMessage` of the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(api_url: String, token: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        // Error replies carry a description; a body we can't read still counts as a rejection.
        let body: Option<BotResponse> = response.json().await.ok();

        match body {
            Some(BotResponse { ok: true, .. }) if status.is_success() => Ok(()),
            body => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: body
                    .and_then(|b| b.description)
                    .unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}

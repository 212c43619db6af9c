use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::services::practicum::ReviewError;
use crate::services::retry::RetryConfig;

/// Source of homework status answers
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch every status change since `from_date` (unix seconds).
    /// One request, no retries.
    async fn fetch_homeworks(&self, from_date: i64) -> Result<Value, ReviewError>;
}

/// Practicum homework status API client
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl ReviewApi for PracticumClient {
    async fn fetch_homeworks(&self, from_date: i64) -> Result<Value, ReviewError> {
        tracing::debug!(from_date, endpoint = %self.endpoint, "requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(ReviewError::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ReviewError::Endpoint {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(ReviewError::from_transport)?;

        serde_json::from_str(&body).map_err(|e| ReviewError::Decode(e.to_string()))
    }
}

/// Retries transport failures of the wrapped client with backoff.
/// HTTP status and decoding errors are returned on the first occurrence.
pub struct RetryingReviewApi<R> {
    inner: R,
    config: RetryConfig,
}

impl<R: ReviewApi> RetryingReviewApi<R> {
    pub fn new(inner: R, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

impl RetryingReviewApi<PracticumClient> {
    /// Practicum client whose per-request timeout comes from the retry policy
    pub fn practicum(endpoint: String, token: String, config: RetryConfig) -> Self {
        let inner = PracticumClient::new(endpoint, token, config.timeout());
        Self::new(inner, config)
    }
}

#[async_trait]
impl<R: ReviewApi> ReviewApi for RetryingReviewApi<R> {
    async fn fetch_homeworks(&self, from_date: i64) -> Result<Value, ReviewError> {
        let mut attempts = 0;

        loop {
            match self.inner.fetch_homeworks(from_date).await {
                Err(e) if e.is_retryable() => {
                    attempts += 1;
                    if !self.config.should_retry(attempts) {
                        return Err(e);
                    }

                    let delay = self.config.calculate_delay(attempts - 1);
                    tracing::warn!(
                        attempt = attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "review API transport failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }
}

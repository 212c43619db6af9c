use std::time::Duration;

use crate::services::homework::{parse_status, HomeworkError};
use crate::services::notifier::Notifier;
use crate::services::poller::PollCursor;
use crate::services::practicum::{
    check_response, current_date, ResponseError, ReviewApi, ReviewError,
};

/// Sent when the server answers with an empty batch
pub const NO_UPDATES_MESSAGE: &str = "Обновлений нет";

/// Successful result of one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// First homework in the batch changed status
    StatusChanged { message: String, next_cursor: i64 },
    /// Server answered with an empty batch
    NoUpdates { next_cursor: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Homework(#[from] HomeworkError),
}

/// Poll, notify, sleep. Owns the cursor for the life of the process.
pub struct Poller<R, N> {
    review: R,
    notifier: N,
    chat_id: String,
    cursor: PollCursor,
    retry_period: Duration,
}

impl<R: ReviewApi, N: Notifier> Poller<R, N> {
    pub fn new(
        review: R,
        notifier: N,
        chat_id: String,
        cursor: PollCursor,
        retry_period: Duration,
    ) -> Self {
        Self {
            review,
            notifier,
            chat_id,
            cursor,
            retry_period,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor.value()
    }

    /// One fetch/validate/format step. Leaves the cursor alone.
    pub async fn poll(&self) -> Result<TickOutcome, PollError> {
        let response = self.review.fetch_homeworks(self.cursor.value()).await?;

        let homeworks = match check_response(&response) {
            Ok(homeworks) => homeworks,
            Err(ResponseError::EmptyHomeworks) => {
                return Ok(TickOutcome::NoUpdates {
                    next_cursor: current_date(&response)?,
                });
            }
            Err(e) => return Err(e.into()),
        };

        // Only the first entry is reported; the rest of the batch is dropped.
        let first = homeworks.first().ok_or(ResponseError::EmptyHomeworks)?;
        let message = parse_status(first)?;

        Ok(TickOutcome::StatusChanged {
            message,
            next_cursor: current_date(&response)?,
        })
    }

    /// Run one iteration: poll, move the cursor on success, send whatever
    /// message came out of it. Returns the message that was sent.
    pub async fn tick(&mut self) -> String {
        let message = match self.poll().await {
            Ok(TickOutcome::StatusChanged {
                message,
                next_cursor,
            }) => {
                self.cursor.advance(next_cursor);
                tracing::info!(cursor = self.cursor.value(), "homework status changed");
                message
            }
            Ok(TickOutcome::NoUpdates { next_cursor }) => {
                self.cursor.advance(next_cursor);
                tracing::debug!(cursor = self.cursor.value(), "no new homework statuses");
                NO_UPDATES_MESSAGE.to_string()
            }
            Err(e) => {
                tracing::error!(cursor = self.cursor.value(), error = %e, "poll failed");
                format!("Error: {}", e)
            }
        };

        self.notifier.notify(&self.chat_id, &message).await;

        message
    }

    /// Loop forever with a fixed pause between iterations.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor.value(),
            period_secs = self.retry_period.as_secs(),
            "poller started"
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }
}

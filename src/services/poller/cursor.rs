use chrono::Utc;

/// Lower bound (unix seconds) of the next status query.
/// Never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    pub fn starting_now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Move to `timestamp`; an older server time leaves the cursor where it is.
    pub fn advance(&mut self, timestamp: i64) -> bool {
        if timestamp < self.0 {
            tracing::warn!(
                cursor = self.0,
                current_date = timestamp,
                "server time is behind the cursor, keeping cursor"
            );
            return false;
        }
        self.0 = timestamp;
        true
    }
}

/// Failures talking to the review API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("review API returned status {status}")]
    Endpoint { status: u16 },
    #[error("review API is unreachable: {0}")]
    Transport(String),
    #[error("review API request timed out")]
    Timeout,
    #[error("review API response is not valid JSON: {0}")]
    Decode(String),
}

impl ReviewError {
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Only failures below the HTTP layer are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }
}

/// Structural problems with a decoded review API answer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("response has no 'homeworks' key")]
    MissingHomeworks,
    #[error("'homeworks' is not a list")]
    HomeworksNotAList,
    #[error("'homeworks' list is empty")]
    EmptyHomeworks,
    #[error("response has no integer 'current_date'")]
    MissingCurrentDate,
}

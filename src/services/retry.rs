use std::time::Duration;
use rand::Rng;

/// Bounded retry policy for transport failures
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub base_delay_secs: u64,
    pub max_delay_secs: u64,
    pub max_attempts: u32,
    pub jitter_factor: f64,
    pub timeout_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            base_delay_secs: 5,         // 5 seconds
            max_delay_secs: 60,         // 1 minute
            max_attempts: 3,            // first try + 2 retries
            jitter_factor: 0.1,         // ±10%
            timeout_secs: 30,           // 30 seconds per request
        }
    }
}

impl RetryConfig {
    /// Calculate delay before the retry following `attempt` (0-based)
    /// Formula: delay = min(base_delay × 2^attempt × (1 + jitter), max_delay)
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay_secs as f64;
        let exponential = base * 2_f64.powi(attempt as i32);

        let mut rng = rand::rng();
        let jitter = 1.0 + (rng.random::<f64>() * 2.0 - 1.0) * self.jitter_factor;
        let with_jitter = exponential * jitter;

        let capped = with_jitter.min(self.max_delay_secs as f64);

        Duration::from_secs_f64(capped.max(0.0))
    }

    /// `attempt` is the number of attempts already made
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Timeout applied to each HTTP request
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub mod config;
pub mod services;

use config::Config;
use services::notifier::TelegramNotifier;
use services::poller::{PollCursor, Poller};
use services::practicum::{PracticumClient, RetryingReviewApi};

pub type HomeworkPoller = Poller<RetryingReviewApi<PracticumClient>, TelegramNotifier>;

/// Wire the production clients into a poller whose cursor starts now.
pub fn create_poller(config: &Config) -> HomeworkPoller {
    let review = RetryingReviewApi::practicum(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.retry_config(),
    );

    let notifier = TelegramNotifier::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.request_timeout(),
    );

    Poller::new(
        review,
        notifier,
        config.telegram_chat_id.clone(),
        PollCursor::starting_now(),
        config.retry_period(),
    )
}

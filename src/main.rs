use std::fs::OpenOptions;
use std::sync::Mutex;

use homework_bot::config::{log_file_from_env, Config};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let log_path = log_file_from_env();
    let (file_layer, log_error) = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => (
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info".into()),
        )
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = log_error {
        tracing::warn!(path = %log_path, error = %e, "log file unavailable, logging to stdout only");
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "critical: required configuration missing, refusing to start");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut poller = homework_bot::create_poller(&config);
    poller.run().await;
}

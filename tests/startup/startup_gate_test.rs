// =============================================================================
// INTEGRATION TESTS - STARTUP GATE
// Runs the real binary with an incomplete environment
// =============================================================================

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::process::Command;
use wiremock::{Mock, MockServer, ResponseTemplate};

const BIN: &str = env!("CARGO_BIN_EXE_homework-bot");

/// Empty working directory so no stray `.env` is picked up
fn scratch_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("homework-bot-{}-{}", name, nanos));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn bot_command(dir: &PathBuf, review_url: &str) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env_clear()
        .current_dir(dir)
        .env("LOG_FILE", dir.join("homework.log"))
        .env("PRACTICUM_TOKEN", "practicum-token")
        .env("TELEGRAM_TOKEN", "123:abc")
        .env("TELEGRAM_CHAT_ID", "42")
        .env("URL", review_url)
        .env("TELEGRAM_API_URL", review_url)
        .kill_on_drop(true);
    cmd
}

#[tokio::test]
async fn test_missing_credential_exits_before_polling() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for missing in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
        let dir = scratch_dir("gate");
        let output = tokio::time::timeout(
            Duration::from_secs(30),
            bot_command(&dir, &server.uri()).env_remove(missing).output(),
        )
        .await
        .expect("binary must exit on its own")
        .unwrap();

        assert_eq!(output.status.code(), Some(1), "missing {}", missing);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(&format!("{} must be set", missing)),
            "stderr: {}",
            stderr
        );

        let log = std::fs::read_to_string(dir.join("homework.log")).unwrap();
        assert!(log.contains("ERROR"), "log: {}", log);
        assert!(log.contains("refusing to start"), "log: {}", log);

        std::fs::remove_dir_all(&dir).ok();
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "no request may leave before the loop");
}

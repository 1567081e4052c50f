//! Runs the built binary for the one-shot commands.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{temp_file, UNREACHABLE_URL};
use std::process::Command;
use tempfile::TempDir;

/// Binary pinned to an empty config dir so the user's file never leaks in.
fn ragdesk_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ragdesk"));
    cmd.env_remove("RAGDESK_API_URL")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = ragdesk_cmd(&dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--api-url"));
    assert!(stdout.contains("ask"));
    assert!(stdout.contains("summarize"));
}

#[test]
fn test_ask_unreachable_backend_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = ragdesk_cmd(&dir)
        .args(["--api-url", UNREACHABLE_URL, "ask", "What time is dinner?"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Could not reach AI. Ensure backend is running.");
}

#[test]
fn test_blank_question_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = ragdesk_cmd(&dir)
        .args(["--api-url", UNREACHABLE_URL, "ask", "   "])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Question is empty."));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_summarize_rejects_non_text_file() {
    let dir = TempDir::new().unwrap();
    let output = ragdesk_cmd(&dir)
        .args(["--api-url", UNREACHABLE_URL, "summarize", "photo.png"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Only .txt files"));
}

#[test]
fn test_invalid_api_url_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = ragdesk_cmd(&dir)
        .args(["--api-url", "localhost:9200", "ask", "q"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("must start with http"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ask_prints_answer() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::answer("7pm")).await;
    let dir = TempDir::new().unwrap();

    let output = ragdesk_cmd(&dir)
        .args(["--api-url", mock.base_url().as_str(), "ask", "What time is dinner?"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7pm");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_summarize_prints_summary() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::answer("Zoo, then nap."))
        .await;
    let (_files, path) = temp_file("plans.txt", "Saturday: zoo. Sunday: nap.");
    let dir = TempDir::new().unwrap();

    let output = ragdesk_cmd(&dir)
        .args(["--api-url", mock.base_url().as_str(), "summarize"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Zoo, then nap.");
    assert_eq!(mock.captured_requests().await.len(), 1);
}

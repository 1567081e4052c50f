//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use ragdesk::api::ApiClient;
use ragdesk::config::Config;
use ragdesk::ui::app::App;
use ragdesk::ui::events::AppEvent;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Base URL nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    temp_file("config.toml", content)
}

/// Write `content` to a temporary file called `name`.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 5;
    config.api.connect_timeout_seconds = 2;
    config.chat.reply_delay_ms = 20;
    config
}

// -- App helpers --------------------------------------------------------------

/// An `App` plus the receiving end of its event channel.
///
/// Must be created inside a multi-thread tokio runtime: the app spawns its
/// calls there while the test thread blocks on the channel.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
}

impl Harness {
    pub fn new(base_url: &str) -> Self {
        Self::with_config(&test_config(base_url))
    }

    pub fn with_config(config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let client = ApiClient::new(&config.api).expect("Failed to build client");
        let app = App::new(config, client, tokio::runtime::Handle::current(), tx);
        Self { app, events: rx }
    }

    /// Feed events to the app until `done` holds or `timeout` passes.
    pub fn pump_until(&mut self, timeout: Duration, done: impl Fn(&App) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while !done(&self.app) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.events.recv_timeout(remaining) {
                Ok(event) => self.app.handle_event(event),
                Err(_) => return done(&self.app),
            }
        }
        true
    }

    /// Feed every event that arrives within `duration`. Returns how many.
    pub fn pump_for(&mut self, duration: Duration) -> usize {
        let deadline = Instant::now() + duration;
        let mut handled = 0;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return handled;
            }
            match self.events.recv_timeout(remaining) {
                Ok(event) => {
                    self.app.handle_event(event);
                    handled += 1;
                }
                Err(_) => return handled,
            }
        }
    }
}

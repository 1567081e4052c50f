//! Configuration loading for ragdesk.
//!
//! Settings come from a TOML file, then the `RAGDESK_API_URL` environment
//! variable, then CLI flags (applied by the binary).

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, ChatConfig, Config, ThemeName, UiConfig};

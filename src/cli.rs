//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ConfigError, ThemeName, API_URL_ENV};

#[derive(Debug, Parser)]
#[command(name = "ragdesk", version)]
#[command(about = "Terminal client for the Simple RAG backend")]
pub struct Cli {
    /// Backend base URL (overrides config file and RAGDESK_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Starting theme for the TUI
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Ask the backend a question and print the answer
    Ask {
        /// The question to send
        question: String,
    },
    /// Upload a .txt file and print its summary
    Summarize {
        /// Plain-text file to upload
        file: PathBuf,
    },
}

impl Cli {
    /// Load config and apply overrides: file, then `RAGDESK_API_URL`, then
    /// flags.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        self.resolve_config_with_env(std::env::var(API_URL_ENV).ok())
    }

    /// Same as [`Cli::resolve_config`] with the environment value passed in.
    pub fn resolve_config_with_env(&self, env_url: Option<String>) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let mut config = config
            .with_api_url_override(env_url)?
            .with_api_url_override(self.api_url.clone())?;
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        Ok(config)
    }
}

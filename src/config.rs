//! Configuration management for the assistant bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. None of them change command behavior.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt printed before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();
        Self::from_vars()
    }

    fn from_vars() -> ConfigResult<Self> {
        let log_level = env::var("LOG_LEVEL")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_else(|_| "error".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

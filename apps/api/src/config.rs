use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub completion_api_url: String,
    pub completion_api_token: Option<String>,
    pub completion_timeout: Duration,
    /// Local prompt length guard. Unset means the completion service is the only bound.
    pub max_prompt_chars: Option<usize>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            completion_api_url: require_env("COMPLETION_API_URL")?,
            completion_api_token: optional_env("COMPLETION_API_TOKEN"),
            completion_timeout: Duration::from_secs(
                optional_env("COMPLETION_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(120),
            ),
            max_prompt_chars: parse_prompt_limit(optional_env("MAX_PROMPT_CHARS").as_deref())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// `None` disables the guard; zero is rejected rather than failing every ask.
fn parse_prompt_limit(value: Option<&str>) -> Result<Option<usize>> {
    value
        .map(|v| v.trim().parse::<NonZeroUsize>().map(NonZeroUsize::get))
        .transpose()
        .context("MAX_PROMPT_CHARS must be a positive integer")
}

/// Empty values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

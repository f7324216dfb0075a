//! Environment-resolved configuration.

use std::time::Duration;

use anyhow::{Context, Result};

use drovery_core::{ApiUrl, AuthMode};

const DEFAULT_API_URL: &str = "https://api.drovery.com";
const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_MOCK_DELAY_MS: u64 = 1_000;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which backend strategy to build the client with.
    pub mode: AuthMode,
    /// Base URL for the remote backend.
    pub api_url: ApiUrl,
    /// Request timeout for the remote backend.
    pub timeout: Duration,
    /// Artificial delay for the simulated backend.
    pub mock_delay: Duration,
}

impl Config {
    /// Resolve configuration from the environment, with built-in defaults.
    ///
    /// Recognized variables: `DROVERY_AUTH_MODE` (`mock`|`api`),
    /// `DROVERY_API_URL`, `DROVERY_API_TIMEOUT_MS`, `DROVERY_MOCK_DELAY_MS`.
    pub fn from_env() -> Result<Self> {
        let mode = match std::env::var("DROVERY_AUTH_MODE") {
            Ok(value) => value
                .parse::<AuthMode>()
                .context("Invalid DROVERY_AUTH_MODE")?,
            Err(_) => AuthMode::default(),
        };

        let api_url = std::env::var("DROVERY_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = ApiUrl::new(&api_url).context("Invalid DROVERY_API_URL")?;

        let timeout = duration_from_env("DROVERY_API_TIMEOUT_MS", DEFAULT_API_TIMEOUT_MS)?;
        let mock_delay = duration_from_env("DROVERY_MOCK_DELAY_MS", DEFAULT_MOCK_DELAY_MS)?;

        Ok(Self {
            mode,
            api_url,
            timeout,
            mock_delay,
        })
    }
}

fn duration_from_env(var: &str, default_ms: u64) -> Result<Duration> {
    let ms = match std::env::var(var) {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("Invalid {var}: expected milliseconds"))?,
        Err(_) => default_ms,
    };
    Ok(Duration::from_millis(ms))
}

//! Client configuration loaded from environment variables.
//!
//! Configuration is resolved once at startup, validated, and then handed to
//! the components that need it. Nothing reads the environment afterwards.
//!
//! ```bash
//! export API_BASE_URL="https://sho.rt"
//! export MIN_HOST_LENGTH="3"
//! ```
//!
//! ## Optional Variables
//!
//! - `API_BASE_URL` - Shortening service base address (default: `http://localhost:8000`)
//! - `MIN_HOST_LENGTH` - Shortest accepted host name (default: 3)
//! - `MAX_URL_LENGTH` - Longest accepted address (default: 2048)
//! - `COPY_ACK_MS` - How long "Copied!" stays visible, in milliseconds (default: 2000)
//! - `REQUEST_TIMEOUT_SECS` - Timeout for the shorten request (default: none)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::domain::validation::{DEFAULT_MAX_URL_LENGTH, DEFAULT_MIN_HOST_LENGTH, UrlValidator};
use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_COPY_ACK_MS: u64 = 2000;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the shortening service, without the `/api/shorten/` path.
    pub api_base_url: String,
    pub min_host_length: usize,
    pub max_url_length: usize,
    /// How long the copy acknowledgement stays set, in milliseconds.
    pub copy_ack_ms: u64,
    /// Request timeout in seconds. `None` lets the service decide how long a request takes.
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            min_host_length: DEFAULT_MIN_HOST_LENGTH,
            max_url_length: DEFAULT_MAX_URL_LENGTH,
            copy_ack_ms: DEFAULT_COPY_ACK_MS,
            request_timeout_secs: None,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = env::var("API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base_url);

        let min_host_length = env::var("MIN_HOST_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_host_length);

        let max_url_length = env::var("MAX_URL_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_url_length);

        let copy_ack_ms = env::var("COPY_ACK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.copy_ack_ms);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            api_base_url,
            min_host_length,
            max_url_length,
            copy_ack_ms,
            request_timeout_secs,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an `http://` or `https://` address
    /// - `min_host_length` is 0 or larger than `max_url_length`
    /// - `copy_ack_ms` is 0
    /// - `request_timeout_secs` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            );
        }

        if url::Url::parse(&self.api_base_url).is_err() {
            anyhow::bail!("API_BASE_URL is not a valid URL: '{}'", self.api_base_url);
        }

        if self.min_host_length == 0 {
            anyhow::bail!("MIN_HOST_LENGTH must be at least 1");
        }

        if self.min_host_length > self.max_url_length {
            anyhow::bail!(
                "MAX_URL_LENGTH ({}) must not be smaller than MIN_HOST_LENGTH ({})",
                self.max_url_length,
                self.min_host_length
            );
        }

        if self.copy_ack_ms == 0 {
            anyhow::bail!("COPY_ACK_MS must be greater than 0");
        }

        if self.request_timeout_secs == Some(0) {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0 when set");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Full address of the shorten endpoint.
    pub fn shorten_endpoint(&self) -> String {
        format!("{}/api/shorten/", self.api_base_url.trim_end_matches('/'))
    }

    pub fn validator(&self) -> UrlValidator {
        UrlValidator::new(self.min_host_length, self.max_url_length)
    }

    pub fn copy_ack_window(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Shorten endpoint: {}", self.shorten_endpoint());
        tracing::info!("  Min host length: {}", self.min_host_length);
        tracing::info!("  Max URL length: {}", self.max_url_length);
        tracing::info!("  Copy acknowledgement: {} ms", self.copy_ack_ms);
        match self.request_timeout_secs {
            Some(secs) => tracing::info!("  Request timeout: {} s", secs),
            None => tracing::info!("  Request timeout: none"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

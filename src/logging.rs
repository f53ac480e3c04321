//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the short URL printed on
//! stdout. Nothing is persisted.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global `tracing` subscriber described by `config`.
///
/// Falls back to `warn` if `RUST_LOG` is not a valid filter. Calling this
/// more than once keeps the first subscriber.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_ok() {
        tracing::debug!(format = %config.log_format, "Logging initialized");
    }
}

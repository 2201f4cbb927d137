//! Tracing subscriber setup.
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Logs to stderr so stdout carries only the JSON report.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

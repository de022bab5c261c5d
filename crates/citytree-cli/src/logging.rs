use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr subscriber; stdout stays reserved for listings.
pub fn init_logging(level: &str) -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_new(level).context("invalid log level")?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("logging already initialized: {e}"))
}

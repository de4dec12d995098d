//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so stdout carries only the confirmation message.
//! Without `-v`/`-q` the filter comes from `RUST_LOG`, defaulting to `warn`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Explicit level; `None` defers to `RUST_LOG`.
    pub level: Option<LevelFilter>,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
}

impl LogConfig {
    /// Map CLI flags to a config.
    ///
    /// - `-q`: errors only
    /// - `-v`: debug
    /// - `-vv` and above: trace
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => Some(LevelFilter::ERROR),
            (false, 0) => None,
            (false, 1) => Some(LevelFilter::DEBUG),
            (false, _) => Some(LevelFilter::TRACE),
        };
        Self {
            level,
            with_target: verbose > 1,
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match config.level {
        Some(level) => EnvFilter::default().add_directive(level.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .try_init()
}

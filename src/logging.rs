//! Log subscriber setup
//!
//! Logs go to stderr; stdout belongs to the MCP protocol. The filter comes
//! from the first of: `--log-level`, `RUST_LOG`, `logging.level`, `info`.

use tracing_subscriber::EnvFilter;

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Pick the filter directive by precedence.
pub fn filter_directive(
    cli_level: Option<&str>,
    env_filter: Option<&str>,
    config_level: Option<&str>,
) -> String {
    cli_level
        .or(env_filter.filter(|s| !s.trim().is_empty()))
        .or(config_level)
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(cli_level: Option<&str>, config_level: Option<&str>) {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(cli_level, env_filter.as_deref(), config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

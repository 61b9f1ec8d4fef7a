use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "BATCHRUN_LOG";

/// Install the global subscriber. Logs go to stderr so stdout carries only progress lines.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

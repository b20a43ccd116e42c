use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 4] = ["mailfeed", "mailfeed_cli", "mailfeed_engine", "mailfeed_runtime"];

/// Install the stderr subscriber. RUST_LOG wins over `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Our crates at `level`, dependencies at warn
fn default_filter(level: LogLevel) -> EnvFilter {
    let directives: Vec<String> = CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect();
    EnvFilter::new(format!("warn,{}", directives.join(",")))
}

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 4] = [
    "letterbox",
    "letterbox_runtime",
    "letterbox_engine",
    "letterbox_types",
];

/// Filter directives for `--log-level`: our crates at `level`, everything else at warn.
pub fn directives(level: LogLevel) -> String {
    let mut parts = vec!["warn".to_string()];
    parts.extend(CRATES.iter().map(|krate| format!("{}={}", krate, level)));
    parts.join(",")
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `--log-level`.
///
/// Stdout stays reserved for command output so `--format json` remains parseable.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive (e.g. `xjs_engine=debug`)
pub const LOG_ENV: &str = "XJS_LOG";

/// Filter from XJS_LOG, then RUST_LOG, else the `--log-level` value
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Install the stderr subscriber. A second call is a no-op.
pub fn init(level: LogLevel) {
    let ansi = std::io::stderr().is_terminal();

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

//! Logging setup for the replay tool
//!
//! Logs go to stderr so the replay transcript on stdout stays clean.
//! `RUST_LOG` wins when set; otherwise `DEBUG_LOGGING=1` enables debug output
//! for the examine crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,examine_core=debug,examine_overlay=debug,examine_cli=debug";

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "info" }));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "Logging initialized");
}

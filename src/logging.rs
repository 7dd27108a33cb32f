//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The filter defaults to `info` for this crate and `warn` for everything else,
//! and can be overridden through `RUST_LOG`. Answer text is never logged, only
//! field ids and counts.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "warn,framework_worksheet=info";

pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns false when one was already set.
pub fn init_logging() -> bool {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(fmt::layer().with_target(true).compact())
        .try_init()
        .is_ok()
}

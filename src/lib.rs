pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod web;

// re-export
pub use app::{serve, App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Console tracing for local development.
/// Respects `RUST_LOG`, falls back to `debug`.
/// Safe to call more than once (subsequent calls are no-ops), which the test harness relies on.
pub fn init_dbg_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(filter)
        .compact()
        .try_init();
}

/// JSON tracing for production.
/// Respects `RUST_LOG`, falls back to `info`.
pub fn init_production_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_env_filter(filter)
        .try_init();
}

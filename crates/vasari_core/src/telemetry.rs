//! Tracing initialization for library hosts and tests.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing with a fmt subscriber for development.
///
/// The subscriber respects the RUST_LOG environment variable. Returns an
/// error when a global subscriber is already installed, so tests can call
/// this repeatedly and ignore the result.
///
/// # Errors
///
/// Returns error if subscriber initialization fails.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    // Create fmt layer for human-readable logs
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::from_default_env());

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    Ok(())
}

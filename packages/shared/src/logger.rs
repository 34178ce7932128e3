//! Tracing subscriber setup shared by Engawa binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies to every target.
/// Calling this twice is harmless: the second call keeps the first subscriber.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    match result {
        Ok(()) => tracing::debug!("logger initialized for '{}'", name),
        Err(e) => tracing::debug!("logger for '{}' already initialized: {}", name, e),
    }
}

fn default_directive(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        "info".to_string()
    } else {
        level.to_string()
    }
}

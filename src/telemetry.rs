//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` overrides `default_directive` (e.g. `"chromalens=info"`).
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(default_directive: &str) {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .try_init();

    if let Err(e) = result {
        tracing::debug!(%e, "Tracing subscriber already installed");
    }
}

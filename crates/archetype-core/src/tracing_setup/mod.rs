//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Archetype tracing/logging system.
///
/// Reads the `ARCHETYPE_LOG` environment variable for per-module levels,
/// e.g. `ARCHETYPE_LOG=archetype_engine=debug,archetype_lexicon=info`.
///
/// Falls back to `archetype=info` if `ARCHETYPE_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ARCHETYPE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("archetype=info"));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string, such as the
/// configured `observability.log_level`. Idempotent like `init_tracing`.
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter);
    });
}

/// Initialize tracing at the configured `observability.log_level` for the
/// `archetype` crates. `ARCHETYPE_LOG`, when set and valid, still wins.
pub fn init_tracing_with_level(level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ARCHETYPE_LOG")
            .or_else(|_| EnvFilter::try_new(format!("archetype={level}")))
            .unwrap_or_else(|_| EnvFilter::new("archetype=info"));
        install(filter);
    });
}

/// Whether a subscriber has been installed by this module.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

fn install(filter: EnvFilter) {
    // A host may already own the global subscriber; that is not an error.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}

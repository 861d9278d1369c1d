//! Tracing initialization.
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use tracing_subscriber::{EnvFilter, prelude::*};

/// Initialize tracing. Call once at process startup; later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "shopify_app_toml=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}

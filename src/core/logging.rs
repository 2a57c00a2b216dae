//! Tracing setup
//!
//! Log output goes to stderr so it never interleaves with frames drawn on
//! stdout. `RUST_LOG` overrides the default `info` level.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let result = tracing_subscriber::fmt()
            .compact()
            .with_target(false)
            .with_thread_names(false)
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to install tracing subscriber: {}", e);
        }
    });
}

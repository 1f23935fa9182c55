//! Test-only helpers shared by the datum crates.

use std::sync::Once;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Environment variable checked before `RUST_LOG` for the test log filter.
pub const LOG_ENV_VAR: &str = "DATUM_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter directive: `DATUM_LOG`, then `RUST_LOG`, then `warn`.
pub fn filter_directive() -> String {
    [LOG_ENV_VAR, "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Initialize tracing for test binaries. Safe to call multiple times.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        let directive = filter_directive();
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // Another harness may have installed a global subscriber already.
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(feature = "auto-init")]
mod auto {
    // Runs at binary init time so individual tests need not call init.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}

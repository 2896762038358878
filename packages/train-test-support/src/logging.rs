//! Logging for integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber at `warn` unless `TEST_LOG` or `RUST_LOG` say otherwise.
pub fn init() {
    init_with_default("warn");
}

/// Install the test subscriber once per process.
///
/// `TEST_LOG` wins over `RUST_LOG`, which wins over `default_level`. Later
/// calls are no-ops, whatever level they ask for.
pub fn init_with_default(default_level: &str) {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .without_time()
            .try_init()
            .ok();
    });
}

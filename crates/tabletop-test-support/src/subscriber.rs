//! Routes log output through the test harness.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber that writes through libtest's capture.
///
/// Safe to call from every test; only the first call installs anything.
/// The filter honours `RUST_LOG` and defaults to `debug`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

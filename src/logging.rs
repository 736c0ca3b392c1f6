//! Structured logging for the macro pad.
//!
//! Sets up tracing with an environment filter and a compact console layer.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// - `RUST_LOG` overrides the filter
/// - defaults to DEBUG for this crate in debug builds, INFO in release
/// - console output with target, file and line
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init() {
    let default_level = if cfg!(debug_assertions) {
        "umpb=debug,info"
    } else {
        "umpb=info,warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .try_init();
}

/// Initialize logging for tests.
///
/// Output goes through the test harness writer so it only shows for failing
/// tests. Safe to call from every test.
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

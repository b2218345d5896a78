//! Logging setup for the seqwalk binary.
//!
//! Diagnostics go to stderr so stdout carries only visited values.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is used,
/// falling back to `warn` if it does not parse. Calling this twice is
/// harmless: the second call leaves the first subscriber in place.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

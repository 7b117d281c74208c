//! Logging setup for the demo programs

use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize a compact tracing subscriber writing to stderr.
/// - Respects `RUST_LOG` if set, otherwise uses [`DEFAULT_FILTER`]
/// - Keeps stdout free for the demo output itself
/// - Safe to call more than once; later calls are no-ops
pub fn init_logging() {
    init_logging_with(DEFAULT_FILTER);
}

/// Same as [`init_logging`] with a caller-chosen fallback filter
pub fn init_logging_with(fallback: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging_with("debug");
        tracing::info!("logging initialized twice without panicking");
    }
}

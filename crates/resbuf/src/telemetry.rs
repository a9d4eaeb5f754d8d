//! Tracing setup for the demonstration binaries.
//!
//! Lifecycle events are emitted at `INFO` under the `resbuf::lifecycle`
//! target. Verbosity is controlled through `RUST_LOG`:
//!
//! - unset: `info`, so the full transcript is printed
//! - `RUST_LOG=resbuf::lifecycle=off` silences the transcript
//! - `RUST_LOG=warn` keeps only warnings and errors

use tracing_subscriber::EnvFilter;

/// Default filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global `fmt` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_is_idempotent() {
        setup_tracing();
        setup_tracing();
        tracing::info!(target: "resbuf::lifecycle", "still alive");
    }
}

//! Logging setup.
//!
//! The core instruments itself with `tracing`; hosts that want output on
//! stderr call [`init_logging`] once at startup. Embedders with their own
//! subscriber can skip it entirely.

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` for everything and `info` for refscout when `RUST_LOG`
/// is unset. Idempotent: a second call (or a subscriber installed by the
/// host) wins silently.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,refscout=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

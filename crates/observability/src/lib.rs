//! `trimdesk-observability` — process-wide logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Filter defaults to `info` and is overridable through `RUST_LOG`.
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}

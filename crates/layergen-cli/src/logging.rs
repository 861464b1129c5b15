//! Logging initialisation for the layergen CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr so the JSON
//! payloads on disk stay the only machine-readable output. The log level
//! is controlled via `RUST_LOG` and defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install global structured logging if it has not already been configured.
///
/// Subsequent calls are no-ops, which keeps tests that share a process
/// from fighting over the global subscriber.
pub fn init_logging() {
    if INITIALISED.get().is_some() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // If another subscriber already owns the global slot, keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    let _ = INITIALISED.set(());
}

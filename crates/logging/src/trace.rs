//! Bridge between the CLI verbosity level and the `tracing` ecosystem.
//!
//! Library crates in the workspace instrument internal steps with `tracing`
//! events behind their own `tracing` features. Installing this bridge makes
//! those events visible on standard error at a filter level matching the
//! user's `-v` flags, without the libraries knowing about the CLI.

use tracing_subscriber::EnvFilter;

use crate::Verbosity;

/// Installs a global `tracing` subscriber filtered to match `verbosity`.
///
/// An explicit `RUST_LOG` environment variable takes precedence over the
/// derived filter. Installation is idempotent: if a subscriber is already
/// registered (for example across repeated in-process CLI runs in tests), the
/// existing one is kept and no error is reported.
pub fn init(verbosity: Verbosity) {
    let fallback = match verbosity {
        Verbosity::Off => "warn",
        Verbosity::Info => "info",
        Verbosity::Debug => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .is_ok()
    {
        tracing::debug!(level = fallback, "diagnostic bridge installed");
    }
}

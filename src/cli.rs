// src/cli.rs
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set. Kept quiet so that the
/// diagnostic stream shows little more than the execution banners.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a `tracing` subscriber writing to standard error.
///
/// Logs never reach standard output, so result lines stay machine-readable.
/// Calling this more than once is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

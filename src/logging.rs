use tracing_subscriber::EnvFilter;

/// Sets up logging on stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is left for the statement. Calling this twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

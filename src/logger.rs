use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber used by the command-line tools.
///
/// Honors `RUST_LOG`, defaulting to `info`. Stdout stays free for results.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

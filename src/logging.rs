//! Logging setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber so stdout stays free for program output.
///
/// `RUST_LOG` wins over `default_level`; `verbose` forces debug.
pub fn init(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "bujo";

/// Install the stderr subscriber.
///
/// `-v` raises the `bujo` target from warn to info, `-vv` to debug, `-vvv` to trace.
/// `RUST_LOG` wins when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{CRATE_TARGET}={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbosity counts from the CLI
/// map to info, debug, and trace.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "esports_atlas=info",
        1 => "esports_atlas=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

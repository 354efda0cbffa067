use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset. Stdout carries the report, so
/// diagnostics stay quiet on stderr unless asked for.
pub const DEFAULT_DIRECTIVE: &str = "warn";

pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

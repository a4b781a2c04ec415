use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` wins over the configured `level` when set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_ascii_lowercase()));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).try_init();
}

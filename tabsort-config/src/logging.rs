use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `default_filter`. Log
/// lines go to stderr so stdout stays free for command output. Calling this
/// twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

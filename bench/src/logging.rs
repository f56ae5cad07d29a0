use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Installs the global subscriber, filtered by `RUST_LOG` and defaulting to `INFO`.
///
/// Timestamps and colours are left out, the Lambda log sink adds its own.
pub fn init() {
    Registry::default()
        .with(fmt::layer().with_ansi(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();
}

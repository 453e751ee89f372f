use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Installs the global subscriber: pretty output for interactive use, JSON otherwise.
pub fn init_logging(config: &Config) {
    let registry = tracing_subscriber::Registry::default().with(EnvFilter::from_default_env());

    let result = match config.interactive {
        true => registry.with(fmt::layer().pretty()).try_init(),
        false => registry.with(fmt::layer().json()).try_init(),
    };

    if let Err(err) = result {
        eprintln!("Unable to initialize logger: {err}");
    }
}

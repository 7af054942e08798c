use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber. `RUST_LOG`, when set, wins over `LOG_LEVEL`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter().to_string()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // try_init: tests and embedders may already have a subscriber
    let installed = if config.app_env.is_production() {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.pretty().try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

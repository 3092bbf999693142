use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::models::LoggingConfig;
use crate::validation::ConfigError;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|err| ConfigError::SubscriberInstalled(err.to_string()))
}

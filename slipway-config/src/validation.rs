use thiserror::Error;

use crate::models::NavigatorConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("per_view must be at least 1")]
    ZeroPerView,

    #[error("event_capacity must be at least 1")]
    ZeroEventCapacity,

    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("tracing subscriber already installed: {0}")]
    SubscriberInstalled(String),
}

impl NavigatorConfig {
    /// Reject settings the navigator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigator.per_view == 0 {
            return Err(ConfigError::ZeroPerView);
        }
        if self.navigator.event_capacity == 0 {
            return Err(ConfigError::ZeroEventCapacity);
        }
        self.logging.env_filter()?;
        Ok(())
    }
}

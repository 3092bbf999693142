//! Shared configuration library for Slipway.
//!
//! Loads navigator settings from a TOML/JSON file or inline JSON named by
//! environment variables, validates them, and installs the tracing
//! subscriber hosts use to watch navigator activity.

#![allow(missing_docs)]

pub mod constants;
pub mod logging;
pub mod models;
pub mod validation;

pub use logging::init_tracing;
pub use models::{LoggingConfig, NavigatorConfig, NavigatorConfigSource};
pub use validation::ConfigError;

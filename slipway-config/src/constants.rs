/// Path to a TOML or JSON navigator config file.
pub const CONFIG_PATH_ENV: &str = "SLIPWAY_CONFIG_PATH";

/// Inline JSON navigator config.
pub const CONFIG_JSON_ENV: &str = "SLIPWAY_CONFIG_JSON";

/// Searched in order when neither variable is set.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "slipway.toml",
    "slipway.json",
    "config/slipway.toml",
    "config/slipway.json",
];

pub const DEFAULT_LOG_FILTER: &str = "info";

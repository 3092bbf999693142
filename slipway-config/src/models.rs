use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use slipway_core::NavigatorSettings;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

use crate::constants::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILES, DEFAULT_LOG_FILTER,
};
use crate::validation::ConfigError;

/// Source that produced the navigator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigatorConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset, for example
    /// `"info,slipway::run=debug"`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.filter).map_err(|err| {
            ConfigError::InvalidLogFilter {
                filter: self.filter.clone(),
                reason: err.to_string(),
            }
        })
    }
}

/// Top-level navigator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Layout and behaviour of the navigator itself.
    pub navigator: NavigatorSettings,
    pub logging: LoggingConfig,
}

impl NavigatorConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$SLIPWAY_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SLIPWAY_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults.
    ///
    /// The loaded configuration is validated before it is returned.
    pub fn load_from_env() -> anyhow::Result<(Self, NavigatorConfigSource)> {
        let (config, source) = Self::load_unvalidated()?;
        config
            .validate()
            .with_context(|| format!("invalid navigator config from {source:?}"))?;
        tracing::debug!(
            target: "slipway::config",
            ?source,
            per_view = config.navigator.per_view,
            mode = %config.navigator.mode,
            "navigator config loaded"
        );
        Ok((config, source))
    }

    fn load_unvalidated() -> anyhow::Result<(Self, NavigatorConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, NavigatorConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, NavigatorConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, NavigatorConfigSource::File(path)));
        }

        Ok((Self::default(), NavigatorConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read navigator config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid navigator config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid navigator config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse navigator config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid navigator config json: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }
}

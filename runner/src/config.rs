//! Runner configuration
//!
//! A [`HarnessConfig`] is read from an optional TOML file and then overridden
//! by command-line flags.

use fnref_scenarios::HarnessConfig;
use std::path::{Path, PathBuf};

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for a harness configuration
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Command-line overrides applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub filter: Option<String>,
    pub stop_on_first_failure: bool,
}

/// Load configuration from `path`, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<HarnessConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(HarnessConfig::default());
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Apply command-line overrides
#[must_use]
pub fn apply_overrides(mut config: HarnessConfig, overrides: Overrides) -> HarnessConfig {
    if let Some(filter) = overrides.filter {
        config.filter = Some(filter);
    }
    if overrides.stop_on_first_failure {
        config.stop_on_first_failure = true;
    }
    config
}

//! Buffer configuration loaded from `fizzbuzz.toml`.
//!
//! ```toml
//! [buffer]
//! capacity = 500
//! overflow = "reject" # or "grow"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::buffer::{DEFAULT_CAPACITY, OverflowPolicy};

/// Config file name searched in the working directory and the user config dir.
pub const CONFIG_FILENAME: &str = "fizzbuzz.toml";

/// Errors that can occur while loading the buffer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found at path: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
    /// Number of byte cells, including the unused cell 0.
    pub capacity: usize,
    pub overflow: OverflowPolicy,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::Reject,
        }
    }
}

impl BufferConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overflow == OverflowPolicy::Reject && self.capacity == 0 {
            return Err(ConfigError::Validation(
                "buffer.capacity must be at least 1 when overflow = \"reject\"".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    buffer: BufferConfig,
}

/// Load the buffer configuration.
///
/// Searches in order:
/// 1. Explicit config path (if provided, it must exist)
/// 2. ./fizzbuzz.toml (current directory)
/// 3. ~/.config/fizzbuzz/fizzbuzz.toml
///
/// Returns defaults if no config found.
pub fn load_buffer_config(config_path: Option<&Path>) -> Result<BufferConfig, ConfigError> {
    if let Some(path) = config_path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        return parse_config_file(path);
    }

    let mut paths = vec![PathBuf::from(CONFIG_FILENAME)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("fizzbuzz").join(CONFIG_FILENAME));
    }

    for path in &paths {
        if path.exists() {
            return parse_config_file(path);
        }
    }

    tracing::debug!("No {CONFIG_FILENAME} found, using default buffer config");
    Ok(BufferConfig::default())
}

fn parse_config_file(path: &Path) -> Result<BufferConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    tracing::debug!(
        path = %path.display(),
        capacity = config.capacity,
        overflow = config.overflow.as_str(),
        "Loaded buffer config"
    );
    Ok(config)
}

fn parse_config_str(content: &str) -> Result<BufferConfig, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.buffer)
}

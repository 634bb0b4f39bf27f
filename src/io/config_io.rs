use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::storage::is_valid_key;
use crate::model::config::Config;

pub const CONFIG_FILE: &str = "config.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{path}: storage key {key:?} may only use letters, digits, '-', '_' and '.'")]
    InvalidStorageKey { path: PathBuf, key: String },
}

/// Read `config.toml` from the data directory. A missing file yields defaults.
/// A storage key that can't name a file is rejected here, before any load.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        source: e,
    })?;
    if !is_valid_key(&config.storage.key) {
        return Err(ConfigError::InvalidStorageKey {
            path,
            key: config.storage.key,
        });
    }
    Ok(config)
}

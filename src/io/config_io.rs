use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::RosterConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the config. An explicitly given path must exist and parse; the
/// implicit `./roster.toml` is optional and defaults apply when it is
/// missing.
pub fn load_config(explicit: Option<&Path>) -> Result<RosterConfig, ConfigError> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from("roster.toml"), false),
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(RosterConfig::default());
        }
        Err(e) => return Err(ConfigError::Read { path, source: e }),
    };

    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}

/// User configuration.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::draft::DEFAULT_MAX_COLORS;
use crate::picker::DEFAULT_MAX_PICK_ATTEMPTS;
use crate::types::ColorFormat;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "PALETTR_CONFIG";

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity of a new draft.
    pub max_colors: usize,
    /// Blind draws before the random picker filters the catalog.
    pub max_pick_attempts: usize,
    /// Initial display format.
    pub format: ColorFormat,
    /// JSON palette list that replaces the built-in catalog.
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            max_pick_attempts: DEFAULT_MAX_PICK_ATTEMPTS,
            format: ColorFormat::Hex,
            catalog: None,
        }
    }
}

impl Config {
    /// Loads the config from `$PALETTR_CONFIG` when set, otherwise from
    /// `<config dir>/palettr/config.json`. A missing file means defaults; a
    /// file that does not parse is logged and ignored.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => Ok(config),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse config file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palettr")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("palettr-config-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load_from(&temp_path("missing.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_colors, 20);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{ "max_colors": 8, "format": "rgba" }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.max_colors, 8);
        assert_eq!(config.format, ColorFormat::Rgba);
        assert_eq!(config.max_pick_attempts, DEFAULT_MAX_PICK_ATTEMPTS);
    }

    #[test]
    fn unparsable_file_gives_defaults() {
        let path = temp_path("broken.json");
        fs::write(&path, "max_colors = 8").unwrap();
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }
}

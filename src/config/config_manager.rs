use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::CONFIG_FILE_LOCATION;
use crate::errors::{CustomizerError, CustomizerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads `explicit` if given, else the per-user config when present, else defaults.
    pub fn load(explicit: Option<&Path>) -> CustomizerResult<Config> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CustomizerError::config_error(path, "file does not exist"));
            }
            return Self::load_from(path);
        }

        match Self::default_location() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                log::debug!("No configuration file found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> CustomizerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| CustomizerError::config_error(path, &e.to_string()))
    }

    pub fn parse(content: &str) -> CustomizerResult<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_FILE_LOCATION))
    }
}

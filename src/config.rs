use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const CONFIG_PATH_ENV_VAR: &str = "FERIADO_CONFIG_FILE";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,
    pub fallback_language: String,
    pub country: String,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            language: "es".to_owned(),
            fallback_language: "en".to_owned(),
            country: "colombia".to_owned(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        log::info!("using config file {}", path.display());
        Ok(config)
    }

    pub fn holidays_file(&self) -> PathBuf {
        self.data_dir.join("holidays.json")
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.data_dir.join("locales")
    }
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("feriado").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".feriado.toml"));
    }

    locations
}

/// Loads the explicitly given config file, or the first existing one of
/// the usual locations, or the built-in defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_path(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            return Config::from_path(&location);
        }
    }

    log::info!("no config file found, using defaults");
    Ok(Config::default())
}

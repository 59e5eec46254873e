use std::fs::File;
use std::path::PathBuf;

use directories::UserDirs;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::{CONFIG_DIR, DEFAULT_SPACEX_BASE_URL};
use crate::external_api::ApiError;

#[derive(Deserialize, Serialize, Debug)]
pub struct Config {
    /// Base url of the SpaceX REST API
    pub spacex_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacex_base_url: DEFAULT_SPACEX_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load the app config, falling back to defaults when no file exists
    pub fn load() -> Result<Self, ApiError> {
        let path_to_config = get_config_path()?;
        if !path_to_config.exists() {
            return Ok(Self::default());
        }
        Self::get_config(path_to_config)
    }

    /// Read the app config from a file
    ///
    /// A blank base url in the file falls back to the default instance.
    pub fn get_config(path_to_config: PathBuf) -> Result<Self, ApiError> {
        let file = File::open(path_to_config)?;
        let mut config: Self =
            serde_json::from_reader(file).map_err(|_| ApiError::NotParseConfig)?;
        if config.spacex_base_url.trim().is_empty() {
            config.spacex_base_url = DEFAULT_SPACEX_BASE_URL.to_string();
            return Ok(config);
        }
        config.spacex_base_url = validate_url(config.spacex_base_url)?;
        Ok(config)
    }
}

fn get_config_path() -> Result<PathBuf, ApiError> {
    UserDirs::new()
        .ok_or(ApiError::NotFoundUserDir)
        .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join("config.json"))
}

/// The configured string must be a URL
fn validate_url(mut value: String) -> Result<String, ApiError> {
    let regex = Regex::new(r"^https?://.+$").map_err(|e| ApiError::Parse(e.to_string()))?;
    if !regex.is_match(&value) {
        return Err(ApiError::InvalidUrl);
    }
    if value.ends_with('/') {
        value.pop();
    }
    Ok(value)
}

//! Configuration for the `airdesk` binary.
//!
//! Sources, later ones win:
//! 1. Built-in defaults
//! 2. JSON file at `~/.config/airdesk/config.json` (or `--config FILE`)
//! 3. Environment variables prefixed with `AIRDESK_`, nested with `__`
//!    (`AIRDESK_API__BASE_URL`, `AIRDESK_SCREEN__LOCALE`)

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use airdesk_api::{ApiConfig, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use airdesk_core::{Language, ScreenOptions};

const CONFIG_DIR_NAME: &str = "airdesk";
const CONFIG_FILE_NAME: &str = "config.json";
const ENV_PREFIX: &str = "AIRDESK_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Load(Box::new(e))
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Back-office API connection.
    pub api: ApiConfig,
    /// List screen settings.
    pub screen: ScreenConfig,
}

/// List screen settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub page_size: u32,
    pub flights_sort: String,
    pub users_sort: String,
    /// Notification language (`en-US`, `pt-BR`).
    pub locale: Language,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            flights_sort: "id".to_string(),
            users_sort: "name".to_string(),
            locale: Language::default(),
        }
    }
}

impl ScreenConfig {
    pub fn flights_options(&self) -> ScreenOptions {
        ScreenOptions::sorted_by(self.flights_sort.clone())
            .with_page_size(self.page_size)
            .with_language(self.locale)
    }

    pub fn users_options(&self) -> ScreenOptions {
        ScreenOptions::sorted_by(self.users_sort.clone())
            .with_page_size(self.page_size)
            .with_language(self.locale)
    }
}

impl Config {
    /// Load from the default file location and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load with an optional custom file. A missing file is not an error.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = config_path.map_or_else(Self::default_config_path, Path::to_path_buf);

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Json::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// `~/.config/airdesk/config.json` on Linux, the platform equivalent elsewhere.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if !(1..=MAX_PAGE_SIZE).contains(&self.screen.page_size) {
            return Err(ConfigError::Invalid(format!(
                "screen.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.screen.page_size
            )));
        }
        if self.screen.flights_sort.trim().is_empty() || self.screen.users_sort.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "sort fields must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy safe to print: the bearer token is masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.api.bearer_token.is_some() {
            config.api.bearer_token = Some("***".to_string());
        }
        config
    }
}

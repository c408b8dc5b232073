//! # rcv-config
//!
//! Layered configuration loading for the Recoverlution toolkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RCV_*` prefix, `__` as separator)
//! 2. Project-level `.recoverlution/config.toml`
//! 3. User-level `~/.config/recoverlution/config.toml`
//! 4. Built-in defaults
//!
//! This is the only place backend settings are read from. There are no
//! alternate variable names.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RCV_BACKEND__URL` -> `backend.url`,
//! `RCV_BACKEND__SERVICE_ROLE_KEY` -> `backend.service_role_key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rcv_config::RcvConfig;
//!
//! let config = RcvConfig::load_with_dotenv().expect("config");
//! config.backend.validate().expect("backend settings");
//! println!("backend: {}", config.backend.base_url());
//! ```

mod backend;
mod error;
mod general;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "RCV_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".recoverlution/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RcvConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RcvConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`RcvConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recoverlution").join("config.toml"))
    }
}

//! General application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list/query commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Force reduced motion regardless of the environment.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Directory for per-device state such as seen flags.
    /// Falls back to the platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            reduced_motion: false,
            data_dir: None,
        }
    }
}

impl GeneralConfig {
    /// Resolve the directory for per-device state.
    #[must_use]
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("recoverlution")))
    }
}

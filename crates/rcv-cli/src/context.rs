use std::path::PathBuf;

use anyhow::Context;
use rcv_backend::{AssetUrls, BackendClient};
use rcv_config::RcvConfig;
use rcv_content::motion::MotionPreference;

/// Everything a command handler needs, resolved once per invocation.
///
/// The backend client is built on demand so offline commands (registry,
/// manifest, trust, motion) run without credentials.
pub struct AppContext {
    pub config: RcvConfig,
}

impl AppContext {
    pub fn new(config: RcvConfig) -> Self {
        Self { config }
    }

    pub fn backend(&self) -> anyhow::Result<BackendClient> {
        BackendClient::new(&self.config.backend).context(
            "backend is not configured (set RCV_BACKEND__URL and RCV_BACKEND__ANON_KEY, \
             or add a [backend] section to .recoverlution/config.toml)",
        )
    }

    /// URL derivation only needs the project URL and optional CDN.
    pub fn asset_urls(&self) -> anyhow::Result<AssetUrls> {
        let backend = &self.config.backend;
        if backend.base_url().is_empty() {
            anyhow::bail!("backend.url is not set (set RCV_BACKEND__URL)");
        }
        Ok(AssetUrls::new(backend.base_url(), backend.cdn_base()))
    }

    pub fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }

    pub fn motion_preference(&self) -> MotionPreference {
        MotionPreference::detect(self.config.general.reduced_motion)
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        self.config
            .general
            .resolved_data_dir()
            .context("no data directory available (set RCV_GENERAL__DATA_DIR)")
    }
}

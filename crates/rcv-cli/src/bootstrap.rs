use anyhow::Context;
use rcv_config::RcvConfig;

/// Layered configuration, with the nearest `.env` applied first.
pub fn load_config() -> anyhow::Result<RcvConfig> {
    RcvConfig::load_with_dotenv().context("failed to load configuration")
}

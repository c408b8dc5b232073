use anyhow::Context;

use rcv_content::health::HealthCheck;
use rcv_content::manifest::AssetManifest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ManifestCommands;
use crate::output::output;

/// Handle `rcv manifest`.
pub fn handle(action: &ManifestCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let manifest = AssetManifest::builtin();
    match action {
        ManifestCommands::Get { key } => {
            let metadata = manifest
                .metadata(key)
                .with_context(|| format!("no manifest entry '{key}'"))?;
            output(metadata, flags.format)
        }
        ManifestCommands::Page { page } => output(&manifest.assets_for_page(page), flags.format),
        ManifestCommands::Check => {
            let report = HealthCheck::run(&manifest);
            output(&report, flags.format)?;
            if !report.is_healthy() {
                anyhow::bail!("{} manifest reference(s) are empty", report.empty);
            }
            Ok(())
        }
    }
}

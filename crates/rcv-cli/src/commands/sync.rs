//! The default run: retag brand assets, then summarize what the library holds.

use serde::Serialize;

use rcv_backend::GovernanceReport;
use rcv_core::entities::StorageAsset;
use rcv_core::responses::AssetFacets;

use crate::cli::GlobalFlags;
use crate::commands::governance::sweep;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

const HERO_SAMPLE: u32 = 6;

#[derive(Debug, Serialize)]
struct SyncSummary {
    governance: GovernanceReport,
    facets: AssetFacets,
    hero_sample: Vec<StorageAsset>,
}

/// Handle `rcv sync` and the bare `rcv` invocation.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let backend = ctx.backend()?;

    let governance = sweep(&backend).await?;
    tracing::info!(
        updated = governance.updated,
        failed = governance.failed,
        "governance complete"
    );

    let spinner = Progress::spinner("loading asset facets");
    let facets = backend.get_asset_facets().await;
    spinner.finish_clear();
    let facets = facets?;
    tracing::info!(
        styles = facets.styles.len(),
        dimensions = facets.dimensions.len(),
        types = facets.types.len(),
        "facets loaded"
    );

    let hero_sample = backend.get_hero_assets(None, Some(HERO_SAMPLE)).await?;

    let failed = governance.failed;
    output(
        &SyncSummary {
            governance,
            facets,
            hero_sample,
        },
        flags.format,
    )?;
    fail_on_unclean(failed)
}

/// Per-asset failures don't stop the sweep, but they do fail the run.
pub fn fail_on_unclean(failed: usize) -> anyhow::Result<()> {
    if failed > 0 {
        anyhow::bail!("{failed} asset(s) could not be retagged");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::fail_on_unclean;

    #[test]
    fn failures_fail_the_run() {
        assert!(fail_on_unclean(0).is_ok());
        let err = fail_on_unclean(2).unwrap_err();
        assert_eq!(err.to_string(), "2 asset(s) could not be retagged");
    }
}

use serde::Serialize;

use rcv_backend::governance::universal_tags;
use rcv_backend::{BackendClient, GovernanceReport, OutcomeStatus};
use rcv_core::entities::StorageAsset;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GovernanceCommands;
use crate::commands::sync::fail_on_unclean;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TagPreview {
    style: String,
    #[serde(rename = "type")]
    asset_type: Option<String>,
    dimension: Option<String>,
    tags: Vec<String>,
}

/// Handle `rcv governance`.
pub async fn handle(
    action: &GovernanceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GovernanceCommands::Sync => {
            let report = sweep(&ctx.backend()?).await?;
            output(&report, flags.format)?;
            fail_on_unclean(report.failed)
        }
        GovernanceCommands::Preview {
            style,
            asset_type,
            dimension,
        } => {
            let asset = StorageAsset {
                style: Some(style.clone()),
                asset_type: asset_type.clone(),
                dimension: dimension.clone(),
                ..StorageAsset::default()
            };
            let preview = TagPreview {
                style: style.clone(),
                asset_type: asset_type.clone(),
                dimension: dimension.clone(),
                tags: universal_tags(&asset),
            };
            output(&preview, flags.format)
        }
    }
}

/// Run the governance sweep behind a progress bar.
pub async fn sweep(backend: &BackendClient) -> anyhow::Result<GovernanceReport> {
    let progress = Progress::bar(0, "governing brand assets");
    let result = backend
        .sync_asset_governance_with(|outcome, total| {
            progress.set_length(total as u64);
            progress.set_message(&outcome.object_name);
            progress.inc(1);
            if let OutcomeStatus::Failed { error } = &outcome.status {
                tracing::warn!(id = %outcome.id, %error, "asset not retagged");
            }
        })
        .await;

    match result {
        Ok(report) => {
            progress.finish_ok(&format!(
                "{} updated, {} unchanged, {} failed",
                report.updated, report.unchanged, report.failed
            ));
            Ok(report)
        }
        Err(error) => {
            progress.finish_err("governance sweep failed");
            Err(error.into())
        }
    }
}

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rcv content`.
pub async fn handle(
    action: &ContentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContentCommands::Get { id } => {
            let item = ctx
                .backend()?
                .fetch_content_registry_by_id(id)
                .await?
                .with_context(|| format!("content item '{id}' not found"))?;
            output(&item, flags.format)
        }
    }
}

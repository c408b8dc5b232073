use crate::cli::GlobalFlags;
use crate::cli::subcommands::TracksCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rcv tracks`. Without `--limit` each read uses its own default.
pub async fn handle(
    action: &TracksCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let backend = ctx.backend()?;
    match action {
        TracksCommands::Frontend => output(
            &backend.fetch_soundbite_tracks_frontend(flags.limit).await?,
            flags.format,
        ),
        TracksCommands::ByCode => output(
            &backend.fetch_soundbite_tracks_by_code(flags.limit).await?,
            flags.format,
        ),
        TracksCommands::Recent => output(
            &backend.list_recent_listens(flags.limit).await?,
            flags.format,
        ),
    }
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// No command runs the sync sequence.
pub async fn dispatch(
    command: Option<Commands>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(command) = command else {
        return commands::sync::handle(ctx, flags).await;
    };

    match command {
        Commands::Sync => commands::sync::handle(ctx, flags).await,
        Commands::Governance { action } => commands::governance::handle(&action, ctx, flags).await,
        Commands::Assets { action } => commands::assets::handle(&action, ctx, flags).await,
        Commands::Tracks { action } => commands::tracks::handle(&action, ctx, flags).await,
        Commands::Feed { action } => commands::feed::handle(&action, ctx, flags).await,
        Commands::Content { action } => commands::content::handle(&action, ctx, flags).await,
        Commands::Audio { action } => commands::audio::handle(&action, ctx, flags).await,
        Commands::Event(args) => commands::event::handle(&args, ctx, flags).await,
        Commands::Registry { action } => commands::registry::handle(&action, flags),
        Commands::Manifest { action } => commands::manifest::handle(&action, flags),
        Commands::Trust(args) => commands::trust::handle(&args, ctx, flags),
        Commands::Motion(args) => commands::motion::handle(&args, ctx, flags),
    }
}

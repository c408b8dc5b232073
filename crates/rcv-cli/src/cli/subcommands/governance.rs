use clap::Subcommand;

/// Brand asset governance commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GovernanceCommands {
    /// Retag every brand asset (needs the service key).
    Sync,
    /// Show the tags an asset with these attributes would get.
    Preview {
        style: String,
        #[arg(long = "type")]
        asset_type: Option<String>,
        #[arg(long)]
        dimension: Option<String>,
    },
}

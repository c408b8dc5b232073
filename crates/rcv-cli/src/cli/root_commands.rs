use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AssetsCommands, AudioCommands, ContentCommands, FeedCommands, GovernanceCommands,
    ManifestCommands, RegistryCommands, TracksCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Governance sweep, facet summary, and hero sample (the default).
    Sync,
    /// Brand asset tag governance.
    Governance {
        #[command(subcommand)]
        action: GovernanceCommands,
    },
    /// Storage asset queries and URLs.
    Assets {
        #[command(subcommand)]
        action: AssetsCommands,
    },
    /// Soundbite tracks and listening history.
    Tracks {
        #[command(subcommand)]
        action: TracksCommands,
    },
    /// Personalized feed queue.
    Feed {
        #[command(subcommand)]
        action: FeedCommands,
    },
    /// Server-side content registry.
    Content {
        #[command(subcommand)]
        action: ContentCommands,
    },
    /// User audio storage.
    Audio {
        #[command(subcommand)]
        action: AudioCommands,
    },
    /// Record an analytics event.
    Event(EventArgs),
    /// Command-centre pages and stories.
    Registry {
        #[command(subcommand)]
        action: RegistryCommands,
    },
    /// Bundled marketing image manifest.
    Manifest {
        #[command(subcommand)]
        action: ManifestCommands,
    },
    /// Walk the trust experience with three answers.
    Trust(TrustArgs),
    /// Print animation presets as they resolve for this environment.
    Motion(MotionArgs),
}

/// Arguments for `rcv event`.
#[derive(Clone, Debug, Args)]
pub struct EventArgs {
    /// Event type, e.g. `page_view`.
    pub event_type: String,
    /// JSON object payload.
    #[arg(long)]
    pub payload: Option<String>,
}

/// Arguments for `rcv trust`.
#[derive(Clone, Debug, Args)]
pub struct TrustArgs {
    /// Answer for each of the three moments, 1-4.
    #[arg(
        num_args = 3,
        required = true,
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub choices: Vec<u8>,
    /// Whether the reflected pattern felt familiar.
    #[arg(long, action = clap::ArgAction::Set)]
    pub recognized: Option<bool>,
}

/// Arguments for `rcv motion`.
#[derive(Clone, Debug, Args)]
pub struct MotionArgs {
    /// Force reduced motion.
    #[arg(long)]
    pub reduced: bool,
}

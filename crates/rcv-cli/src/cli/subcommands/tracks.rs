use clap::Subcommand;

/// Soundbite track commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TracksCommands {
    /// Frontend projection of tracks.
    Frontend,
    /// Tracks keyed by code.
    ByCode,
    /// The caller's recent listens.
    Recent,
}

use clap::Subcommand;

/// Content registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContentCommands {
    /// Get a content item by ID.
    Get { id: String },
}

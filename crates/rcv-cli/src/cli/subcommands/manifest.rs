use clap::Subcommand;

/// Image manifest commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ManifestCommands {
    /// Metadata for a logical image ID.
    Get { key: String },
    /// Images used on a page.
    Page { page: String },
    /// Validate every manifest reference.
    Check,
}

use clap::Subcommand;

/// User audio storage commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AudioCommands {
    /// List audio objects under a prefix.
    List { prefix: String },
    /// Rename an audio object.
    Rename { from: String, to: String },
    /// Delete an audio object.
    Delete { object: String },
    /// Temporary download URL.
    Sign {
        bucket: String,
        object: String,
        #[arg(long)]
        expires_in: Option<u32>,
    },
    /// Temporary upload URL.
    UploadUrl {
        bucket: String,
        object: String,
        content_type: String,
        #[arg(long)]
        expires_in: Option<u32>,
    },
}

use clap::{Args, Subcommand};
use rcv_core::enums::ImageFormat;

/// Storage asset commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssetsCommands {
    /// Distinct styles, dimensions, and types.
    Facets,
    /// Filtered asset listing.
    Query(AssetQueryArgs),
    /// Assets for hero slots.
    Hero {
        #[arg(long)]
        style: Option<String>,
    },
    /// Assets suited to a content context (meditation, focus, ...).
    Context { name: String },
    /// Public or CDN URL for a stored object.
    Url(AssetUrlArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AssetQueryArgs {
    #[arg(long)]
    pub style: Option<String>,
    #[arg(long)]
    pub dimension: Option<String>,
    #[arg(long = "type")]
    pub asset_type: Option<String>,
    /// Substring match on description.
    #[arg(long)]
    pub search: Option<String>,
    /// Match assets carrying any of these tags.
    #[arg(long)]
    pub tag: Vec<String>,
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct AssetUrlArgs {
    /// Object path within the bucket.
    pub path: String,
    #[arg(long, default_value = rcv_backend::urls::DEFAULT_BUCKET)]
    pub bucket: String,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    /// webp, avif, png, or jpeg (CDN only).
    #[arg(long)]
    pub image_format: Option<ImageFormat>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,
    /// Cache-busting version (CDN only).
    #[arg(long)]
    pub asset_version: Option<String>,
}

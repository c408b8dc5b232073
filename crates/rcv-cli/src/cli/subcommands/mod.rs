mod assets;
mod audio;
mod content;
mod feed;
mod governance;
mod manifest;
mod registry;
mod tracks;

pub use assets::{AssetQueryArgs, AssetUrlArgs, AssetsCommands};
pub use audio::AudioCommands;
pub use content::ContentCommands;
pub use feed::FeedCommands;
pub use governance::GovernanceCommands;
pub use manifest::ManifestCommands;
pub use registry::RegistryCommands;
pub use tracks::TracksCommands;

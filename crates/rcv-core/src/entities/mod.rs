//! Entity structs for backend rows.
//!
//! Each entity maps to a table, view, or RPC result on the backend. Columns this
//! toolkit does not use are ignored on deserialization. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

use serde::{Deserialize, Deserializer};

mod asset;
mod audio;
mod content;
mod feed;
mod soundbite;

pub use asset::StorageAsset;
pub use audio::UserAudioItem;
pub use content::ContentRegistryItem;
pub use feed::FeedQueueItem;
pub use soundbite::{RecentListen, SoundbiteTrackByCode, SoundbiteTrackFrontend};

/// Columns that are NULL in the database arrive as explicit `null`, which
/// `#[serde(default)]` alone does not cover.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

//! Query and URL option types for storage assets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ImageFormat;

/// Filters for a `storage_assets` query. Every field is optional; unset fields
/// do not constrain the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssetQuery {
    pub style: Option<String>,
    pub dimension: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    /// Case-insensitive substring match against `description`.
    pub search: Option<String>,
    /// Matches assets sharing at least one tag.
    #[serde(default)]
    pub tags: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl AssetQuery {
    /// Query for a single style, optionally narrowed by type.
    #[must_use]
    pub fn for_style(style: &str, asset_type: Option<&str>, limit: u32) -> Self {
        Self {
            style: Some(style.to_string()),
            asset_type: asset_type.map(str::to_string),
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Cache-busting and image-transform options for CDN URLs.
///
/// Only honoured when a CDN base is configured; direct storage URLs ignore them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssetUrlOptions {
    /// Cache-busting version, emitted as `v`.
    pub version: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<ImageFormat>,
    pub quality: Option<u8>,
}

impl AssetUrlOptions {
    /// Options requesting a specific output format only.
    #[must_use]
    pub fn format(format: ImageFormat) -> Self {
        Self {
            format: Some(format),
            ..Self::default()
        }
    }

    /// Whether no option is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.version.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.format.is_none()
            && self.quality.is_none()
    }
}

//! Bundled marketing images keyed by logical id.
//!
//! Pages refer to images by a stable id such as `platform-overview`; the
//! manifest maps that id to the bundled asset reference and records where the
//! image is used.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub id: String,
    pub name: String,
    pub url: String,
    /// Pages that render this image.
    pub used_in: Vec<String>,
    pub purpose: String,
    pub last_verified: Option<NaiveDate>,
}

/// `(id, name, url, used_in, purpose, verified (y, m, d))`
type BuiltinEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    Option<(i32, u32, u32)>,
);

const BUILTIN: &[BuiltinEntry] = &[
    (
        "logo",
        "Recoverlution logo",
        "figma:asset/d3c889f1d4c13c03718e4dd433a2fd6fe4a8d55c.png",
        &["home", "platform", "pricing", "story"],
        "Header and footer wordmark",
        Some((2025, 11, 6)),
    ),
    (
        "platform-overview",
        "Human baseline laptop",
        "figma:asset/bbdd46885c6d7c44cf5e832ddd2d8ac3d24d3a0f.png",
        &["platform"],
        "Connected care app with the six product tiles",
        Some((2025, 11, 6)),
    ),
    (
        "journey-pathways",
        "Structured pathways phones",
        "figma:asset/21ab7c3d05a2f009507ba3a3127b589b26fef6b5.png",
        &["platform", "journey"],
        "ERA framework next to the state metrics dashboard",
        Some((2025, 11, 6)),
    ),
    (
        "connected-ecosystem",
        "Connected ecosystem devices",
        "figma:asset/73f4a98210b635195460d609ccf4085c6a758e40.png",
        &["platform"],
        "Toolkit articles on laptop with wellbeing videos on tablet",
        Some((2025, 11, 6)),
    ),
    (
        "dashboard",
        "Clinician dashboard",
        "figma:asset/c8edf26e8ed03b34a9f6b382ff2d28c54a36836e.png",
        &["dashboard"],
        "Dashboard hero",
        None,
    ),
    (
        "crisis",
        "The crisis",
        "figma:asset/51a98848c649ce4d8ca7521955300eb15e5e84f5.png",
        &["home"],
        "Section two illustration",
        Some((2025, 11, 6)),
    ),
    (
        "final-cta",
        "Purple chair",
        "figma:asset/6364c082f3acea50f59f09412aa1a5f0b355311f.png",
        &["home"],
        "Closing call to action",
        Some((2025, 11, 6)),
    ),
    (
        "insight-architecture",
        "Insight: architecture",
        "figma:asset/10095535b0a260cb13e809f0aff2b357ec9d5051.png",
        &["home", "story"],
        "Insight card",
        None,
    ),
    (
        "insight-micro-blocks",
        "Insight: micro blocks",
        "figma:asset/5152496e67ac8a8406a7bf77a3557092e1b74edf.png",
        &["home", "story"],
        "Insight card",
        None,
    ),
    (
        "insight-technology",
        "Insight: technology",
        "figma:asset/e4c3d8046127b77ffa9979e616ae9a6bdc0b5eb5.png",
        &["home", "story"],
        "Insight card",
        None,
    ),
    (
        "tile-patient-first",
        "Patient first",
        "figma:asset/21fc7433f42ea9d808013b1bc96cc408bb358e5b.png",
        &["home"],
        "Values tile",
        None,
    ),
    (
        "tile-science-backed",
        "Science backed",
        "figma:asset/31fed99ccc575c72f8dd1c27cdee3f720b3f2749.png",
        &["home"],
        "Values tile",
        None,
    ),
    (
        "tile-outcome-focused",
        "Outcome focused",
        "figma:asset/0e6c08bea8b51b27b6111a14bd62c9a87c043cf0.png",
        &["home"],
        "Values tile",
        None,
    ),
    (
        "tile-radically-inclusive",
        "Radically inclusive",
        "figma:asset/a7ccd3161cc0a5ee8b8ca22786b5468d325c6f8e.png",
        &["home"],
        "Values tile",
        None,
    ),
];

/// Logical id → [`AssetMetadata`], ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    entries: BTreeMap<String, AssetMetadata>,
}

impl AssetManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The images bundled with the marketing site.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .map(|(id, name, url, used_in, purpose, verified)| AssetMetadata {
                id: (*id).to_string(),
                name: (*name).to_string(),
                url: (*url).to_string(),
                used_in: used_in.iter().map(ToString::to_string).collect(),
                purpose: (*purpose).to_string(),
                last_verified: verified.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            })
            .collect()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, metadata: AssetMetadata) {
        self.entries.insert(metadata.id.clone(), metadata);
    }

    /// Reference for `key`, if the manifest knows it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|m| m.url.as_str())
    }

    /// Reference for `key`, or `""` (with an error log) for an unknown key.
    ///
    /// For render paths that prefer a blank image to a failure; everything
    /// else should use [`Self::get`].
    #[must_use]
    pub fn resolve(&self, key: &str) -> &str {
        self.get(key).unwrap_or_else(|| {
            tracing::error!(key, "asset not found in manifest");
            ""
        })
    }

    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&AssetMetadata> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn metadata_for_url(&self, url: &str) -> Option<&AssetMetadata> {
        self.entries.values().find(|m| m.url == url)
    }

    /// Entries used on `page` (case-insensitive).
    #[must_use]
    pub fn assets_for_page(&self, page: &str) -> Vec<&AssetMetadata> {
        self.entries
            .values()
            .filter(|m| m.used_in.iter().any(|p| p.eq_ignore_ascii_case(page)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetMetadata> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AssetMetadata> for AssetManifest {
    fn from_iter<I: IntoIterator<Item = AssetMetadata>>(iter: I) -> Self {
        let mut manifest = Self::new();
        for metadata in iter {
            manifest.insert(metadata);
        }
        manifest
    }
}

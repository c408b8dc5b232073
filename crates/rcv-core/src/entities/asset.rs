use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;

/// A binary object in backend storage, as catalogued by the `storage_assets` table.
///
/// Rows are created by the external ingestion process. The only write this
/// toolkit performs is the governance sweep, which rewrites `tags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StorageAsset {
    pub id: String,
    pub object_name: String,
    #[serde(default = "default_bucket", deserialize_with = "null_as_default_bucket")]
    pub bucket_id: String,
    pub storage_path: Option<String>,
    pub style: Option<String>,
    pub dimension: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub size_bytes: Option<i64>,
    pub checksum: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_bucket() -> String {
    String::from("assets")
}

fn null_as_default_bucket<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(|bucket| bucket.unwrap_or_else(default_bucket))
}

impl StorageAsset {
    /// Object path used for URL derivation: `storage_path` when present and
    /// non-empty, otherwise `object_name`.
    #[must_use]
    pub fn object_path(&self) -> &str {
        self.storage_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(&self.object_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_path_prefers_storage_path() {
        let asset = StorageAsset {
            object_name: "brand/a.png".into(),
            storage_path: Some("cdn/a.png".into()),
            ..Default::default()
        };
        assert_eq!(asset.object_path(), "cdn/a.png");
    }

    #[test]
    fn object_path_falls_back_on_empty_storage_path() {
        let asset = StorageAsset {
            object_name: "brand/a.png".into(),
            storage_path: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(asset.object_path(), "brand/a.png");
    }

    #[test]
    fn deserializes_type_column_and_defaults() {
        let json = r#"{"id":"a1","object_name":"x.png","type":"image","extra_col":1}"#;
        let asset: StorageAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.asset_type.as_deref(), Some("image"));
        assert_eq!(asset.bucket_id, "assets");
        assert!(asset.tags.is_empty());
    }

    #[test]
    fn null_columns_fall_back_to_defaults() {
        let json = r#"{"id":"a1","object_name":"x.png","bucket_id":null,"tags":null,"style":null}"#;
        let asset: StorageAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.bucket_id, "assets");
        assert!(asset.tags.is_empty());
        assert_eq!(asset.style, None);
    }
}

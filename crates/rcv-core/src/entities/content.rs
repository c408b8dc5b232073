use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A row of the server-side `content_registry` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContentRegistryItem {
    pub id: String,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub pillar: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

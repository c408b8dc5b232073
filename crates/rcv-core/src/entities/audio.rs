use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An audio object in the signed-in user's storage prefix.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserAudioItem {
    pub name: String,
    pub path: String,
    pub size: Option<i64>,
    pub updated_at: Option<String>,
}

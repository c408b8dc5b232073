//! Request payloads sent to serverless functions and RPCs.
//!
//! Field names follow the functions' JSON contracts (camelCase where the
//! function expects it).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `sign-download-url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignDownloadUrlRequest {
    pub bucket: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

/// Body of `generate-upload-url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUploadUrlRequest {
    pub bucket: String,
    pub object: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

/// Body of `rename-user-audio`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenameAudioRequest {
    pub from: String,
    pub to: String,
}

/// Body of `delete-user-audio`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteAudioRequest {
    pub object: String,
}

/// A structured event for `events-api`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// Body of `v1_feed_pull`. An empty body pulls with server defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedPullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_types: Option<Vec<String>>,
}

/// Arguments of the `list_recent_listens` RPC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecentListensArgs {
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sign_request_uses_camel_case_and_skips_missing_expiry() {
        let req = SignDownloadUrlRequest {
            bucket: "audio".into(),
            object: "u1/take.m4a".into(),
            expires_in: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"bucket": "audio", "object": "u1/take.m4a"}));

        let req = GenerateUploadUrlRequest {
            bucket: "audio".into(),
            object: "u1/take.m4a".into(),
            content_type: "audio/mp4".into(),
            expires_in: Some(600),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contentType"], "audio/mp4");
        assert_eq!(json["expiresIn"], 600);
    }

    #[test]
    fn empty_feed_pull_serializes_to_empty_object() {
        let json = serde_json::to_string(&FeedPullRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn event_record_renames_type() {
        let event = EventRecord {
            event_type: "page_view".into(),
            payload: serde_json::Map::new(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "page_view");
    }
}

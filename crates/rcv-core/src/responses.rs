//! Response payloads from serverless functions and derived summaries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response of `sign-download-url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignedDownloadUrlResponse {
    #[serde(alias = "signed_url")]
    pub signed_url: String,
    #[serde(alias = "expires_at")]
    pub expires_at: Option<String>,
}

/// Response of `generate-upload-url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUploadUrlResponse {
    #[serde(alias = "upload_url")]
    pub upload_url: String,
    pub path: Option<String>,
    pub token: Option<String>,
    #[serde(alias = "expires_at")]
    pub expires_at: Option<String>,
}

/// Distinct values of the categorical asset columns, each sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssetFacets {
    pub styles: Vec<String>,
    pub dimensions: Vec<String>,
    pub types: Vec<String>,
}

/// Format fallbacks for a single asset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FallbackImageUrls {
    pub webp: String,
    pub avif: String,
    pub original: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_url_accepts_either_casing() {
        let camel: SignedDownloadUrlResponse =
            serde_json::from_str(r#"{"signedUrl":"https://x/y","expiresAt":"2025-01-01"}"#).unwrap();
        let snake: SignedDownloadUrlResponse =
            serde_json::from_str(r#"{"signed_url":"https://x/y"}"#).unwrap();
        assert_eq!(camel.signed_url, snake.signed_url);
        assert!(snake.expires_at.is_none());
    }
}

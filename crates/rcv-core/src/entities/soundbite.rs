use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Row of the `v_soundbite_tracks_frontend` view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SoundbiteTrackFrontend {
    pub id: String,
    pub title: String,
    pub code: Option<String>,
    pub audio_url: Option<String>,
    pub artwork_url: Option<String>,
    pub duration_seconds: Option<f64>,
    pub pillar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Row of the `v_soundbite_tracks_by_code` view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SoundbiteTrackByCode {
    pub code: String,
    pub track_id: String,
    pub title: Option<String>,
    pub audio_url: Option<String>,
    pub variant: Option<String>,
}

/// Result row of the `list_recent_listens` RPC.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecentListen {
    pub track_id: String,
    pub title: Option<String>,
    pub listened_at: DateTime<Utc>,
    pub progress_seconds: Option<f64>,
}

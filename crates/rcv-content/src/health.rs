//! Manifest validation and runtime image-failure tracking.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::manifest::AssetManifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    /// The reference is empty or whitespace.
    Empty,
}

impl HealthStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHealth {
    pub id: String,
    pub name: String,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub total: usize,
    pub ok: usize,
    pub empty: usize,
    pub assets: Vec<AssetHealth>,
}

impl HealthReport {
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.empty == 0
    }
}

pub struct HealthCheck;

impl HealthCheck {
    /// Check every manifest entry has a usable reference.
    #[must_use]
    pub fn run(manifest: &AssetManifest) -> HealthReport {
        let mut report = HealthReport::default();
        for metadata in manifest.iter() {
            let status = if metadata.url.trim().is_empty() {
                HealthStatus::Empty
            } else {
                HealthStatus::Ok
            };
            match status {
                HealthStatus::Ok => {
                    report.ok += 1;
                    tracing::debug!(id = %metadata.id, url = %metadata.url, "asset ok");
                }
                HealthStatus::Empty => {
                    report.empty += 1;
                    tracing::warn!(id = %metadata.id, pages = ?metadata.used_in, "asset reference empty");
                }
            }
            report.assets.push(AssetHealth {
                id: metadata.id.clone(),
                name: metadata.name.clone(),
                status,
            });
        }
        report.total = report.assets.len();
        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFailure {
    pub id: String,
    pub url: String,
    pub reason: String,
    pub attempts: u32,
    pub last_failed_at: DateTime<Utc>,
}

/// Images that failed to load and have not loaded since.
#[derive(Debug, Clone, Default)]
pub struct ImageFailureTracker {
    broken: BTreeMap<String, ImageFailure>,
}

impl ImageFailureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, id: &str, url: &str, reason: &str) {
        tracing::warn!(id, url, reason, "image failed to load");
        let now = Utc::now();
        self.broken
            .entry(id.to_string())
            .and_modify(|failure| {
                failure.url = url.to_string();
                failure.reason = reason.to_string();
                failure.attempts += 1;
                failure.last_failed_at = now;
            })
            .or_insert_with(|| ImageFailure {
                id: id.to_string(),
                url: url.to_string(),
                reason: reason.to_string(),
                attempts: 1,
                last_failed_at: now,
            });
    }

    /// A successful load clears any recorded failure.
    pub fn record_success(&mut self, id: &str) {
        if self.broken.remove(id).is_some() {
            tracing::info!(id, "image recovered");
        }
    }

    pub fn broken(&self) -> impl Iterator<Item = &ImageFailure> {
        self.broken.values()
    }

    #[must_use]
    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }

    /// Human-readable list of broken images, or `None` when all are loading.
    #[must_use]
    pub fn alert_summary(&self) -> Option<String> {
        if self.broken.is_empty() {
            return None;
        }
        let mut summary = format!("{} broken image(s):", self.broken.len());
        for failure in self.broken.values() {
            summary.push_str(&format!(
                "\n- {} ({}): {} [x{}]",
                failure.id, failure.url, failure.reason, failure.attempts
            ));
        }
        Some(summary)
    }
}

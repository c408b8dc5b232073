//! Brand asset tagging sweep.
//!
//! Each brand asset gets a deterministic tag set derived from its style,
//! type, and dimension. The sweep is a batch job: one failed row is recorded
//! in the report and the rest still run.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use rcv_core::entities::StorageAsset;

use crate::assets::STORAGE_ASSETS_TABLE;
use crate::query::Query;
use crate::{BackendClient, BackendError, Scope};

/// Object-name prefix selecting the brand assets that get governed.
pub const BRAND_ASSET_PREFIX: &str = "recoverlution-assets/brand/";

const BASE_TAG: &str = "therapeutic";

/// Compute the tag set for `asset`.
///
/// Order is stable and the result never holds duplicates.
#[must_use]
pub fn universal_tags(asset: &StorageAsset) -> Vec<String> {
    let mut tags = vec![BASE_TAG.to_string()];

    let style = asset.style.as_deref().unwrap_or_default().to_lowercase();
    let style_tags: &[&str] = if style.contains("neural_flower") {
        &["growth", "reflection", "beauty", "neural"]
    } else if style.contains("flowstate") {
        &["flow", "harmony", "balance", "engagement"]
    } else if style.contains("evolvingforms") {
        &["transformation", "change", "evolution"]
    } else {
        &[]
    };
    tags.extend(style_tags.iter().map(ToString::to_string));

    if let Some(asset_type) = asset.asset_type.as_deref().filter(|t| !t.is_empty()) {
        tags.push(asset_type.to_lowercase());
    }
    if let Some(dimension) = asset.dimension.as_deref().filter(|d| !d.is_empty()) {
        tags.push(dimension.to_lowercase().replace(':', "-"));
    }

    let mut seen = std::collections::HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));
    tags
}

/// The read that selects every governed asset.
#[must_use]
pub fn governance_query() -> Query {
    Query::table(STORAGE_ASSETS_TABLE)
        .select("*")
        .like("object_name", &format!("{BRAND_ASSET_PREFIX}*"))
}

/// What happened to one asset during a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Updated,
    Unchanged,
    Failed { error: String },
}

impl OutcomeStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Failed { .. } => "failed",
        }
    }
}

/// One row of a [`GovernanceReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceOutcome {
    pub id: String,
    pub object_name: String,
    /// Tags before the sweep, kept so a run can be audited or reverted.
    pub previous_tags: Vec<String>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceReport {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub outcomes: Vec<GovernanceOutcome>,
}

impl GovernanceReport {
    fn record(&mut self, outcome: GovernanceOutcome) {
        self.scanned += 1;
        match outcome.status {
            OutcomeStatus::Updated => self.updated += 1,
            OutcomeStatus::Unchanged => self.unchanged += 1,
            OutcomeStatus::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Serialize)]
struct TagPatch<'a> {
    tags: &'a [String],
    updated_at: String,
}

impl BackendClient {
    /// Retag every brand asset. Requires the service credential.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] only if the credential is missing or the
    /// initial listing fails; per-asset failures land in the report.
    pub async fn sync_asset_governance(&self) -> Result<GovernanceReport, BackendError> {
        self.sync_asset_governance_with(|_, _| {}).await
    }

    /// Like [`Self::sync_asset_governance`], calling `on_outcome` after each
    /// asset with the outcome and the total asset count.
    ///
    /// # Errors
    ///
    /// See [`Self::sync_asset_governance`].
    pub async fn sync_asset_governance_with<F>(
        &self,
        mut on_outcome: F,
    ) -> Result<GovernanceReport, BackendError>
    where
        F: FnMut(&GovernanceOutcome, usize),
    {
        self.credentials(Scope::Service, "asset governance")?;
        let assets: Vec<StorageAsset> = self.select(&governance_query(), Scope::Service).await?;
        let total = assets.len();
        tracing::info!(total, prefix = BRAND_ASSET_PREFIX, "governance sweep started");

        let mut report = GovernanceReport::default();
        for asset in assets {
            let tags = universal_tags(&asset);
            let status = if asset.tags == tags {
                OutcomeStatus::Unchanged
            } else {
                match self.write_tags(&asset.id, &tags).await {
                    Ok(()) => OutcomeStatus::Updated,
                    Err(error) => {
                        tracing::warn!(id = %asset.id, %error, "governance update failed");
                        OutcomeStatus::Failed {
                            error: error.to_string(),
                        }
                    }
                }
            };
            let outcome = GovernanceOutcome {
                id: asset.id,
                object_name: asset.object_name,
                previous_tags: asset.tags,
                tags,
                status,
            };
            on_outcome(&outcome, total);
            report.record(outcome);
        }

        tracing::info!(
            scanned = report.scanned,
            updated = report.updated,
            unchanged = report.unchanged,
            failed = report.failed,
            "governance sweep finished"
        );
        Ok(report)
    }

    async fn write_tags(&self, id: &str, tags: &[String]) -> Result<(), BackendError> {
        let query = Query::table(STORAGE_ASSETS_TABLE).eq("id", id);
        let patch = TagPatch {
            tags,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.update(&query, &patch, Scope::Service).await
    }
}

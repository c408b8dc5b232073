//! Storage asset reads: filtered queries, facets, and style-driven selections.

use std::collections::BTreeSet;

use rcv_core::entities::StorageAsset;
use rcv_core::enums::HeroStyle;
use rcv_core::options::AssetQuery;
use rcv_core::responses::AssetFacets;

use crate::query::{Direction, Query};
use crate::{BackendClient, BackendError, Scope};

pub const STORAGE_ASSETS_TABLE: &str = "storage_assets";

/// Page size assumed for an offset without an explicit limit.
const DEFAULT_PAGE: u32 = 20;
const DEFAULT_STYLE_LIMIT: u32 = 50;
const DEFAULT_SELECTION_LIMIT: u32 = 20;

/// Styles used for a context that has no mapping.
const FALLBACK_CONTEXT_STYLES: &[&str] = &["neural_flower", "flowstate"];

/// Art styles that suit a content context (case-insensitive).
#[must_use]
pub fn context_styles(context: &str) -> &'static [&'static str] {
    match context.to_lowercase().as_str() {
        "meditation" => &["neural_flower", "flowstate", "neural_flow"],
        "reflection" => &["neural_flower", "evolvingforms", "mindblock"],
        "healing" => &["neural_flower", "evolvingforms", "flowstate"],
        "focus" => &["flowstate", "neural_flow", "mindblock"],
        "growth" => &["evolvingforms", "neural_flower", "neural_flow"],
        "calm" => &["flowstate", "neural_flower", "neural_flow"],
        "breakthrough" => &["mindblock", "evolvingforms", "neural_flower"],
        _ => FALLBACK_CONTEXT_STYLES,
    }
}

/// Build the `storage_assets` read for `options`.
#[must_use]
pub fn storage_assets_query(options: &AssetQuery) -> Query {
    let mut query = Query::table(STORAGE_ASSETS_TABLE).select("*");
    if let Some(style) = non_empty(options.style.as_deref()) {
        query = query.eq("style", style);
    }
    if let Some(dimension) = non_empty(options.dimension.as_deref()) {
        query = query.eq("dimension", dimension);
    }
    if let Some(asset_type) = non_empty(options.asset_type.as_deref()) {
        query = query.eq("type", asset_type);
    }
    if let Some(search) = non_empty(options.search.as_deref()) {
        query = query.ilike("description", &format!("*{search}*"));
    }
    if !options.tags.is_empty() {
        query = query.overlaps("tags", &options.tags);
    }
    if let Some(limit) = options.limit.filter(|l| *l > 0) {
        query = query.limit(limit);
    }
    if let Some(offset) = options.offset.filter(|o| *o > 0) {
        let page = options.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE);
        query = query.range(offset, offset.saturating_add(page - 1));
    }
    query
        .order("style", Direction::Asc)
        .order("description", Direction::Asc)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Per-style share of `limit` when filling from `styles` in turn.
const fn per_style_limit(limit: u32, styles: usize) -> u32 {
    if styles == 0 {
        return limit;
    }
    limit.div_ceil(styles as u32)
}

impl BackendClient {
    /// Filtered, paginated asset listing ordered by style then description.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the request fails or rows cannot be decoded.
    pub async fn query_storage_assets(
        &self,
        options: &AssetQuery,
    ) -> Result<Vec<StorageAsset>, BackendError> {
        self.select(&storage_assets_query(options), Scope::User).await
    }

    /// Distinct styles, dimensions, and types, each sorted.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if any of the three reads fails.
    pub async fn get_asset_facets(&self) -> Result<AssetFacets, BackendError> {
        let (styles, dimensions, types) = tokio::try_join!(
            self.facet_values("style"),
            self.facet_values("dimension"),
            self.facet_values("type"),
        )?;
        Ok(AssetFacets {
            styles,
            dimensions,
            types,
        })
    }

    async fn facet_values(&self, column: &str) -> Result<Vec<String>, BackendError> {
        let query = Query::table(STORAGE_ASSETS_TABLE)
            .select(column)
            .not_null(column);
        let rows: Vec<serde_json::Map<String, serde_json::Value>> =
            self.select(&query, Scope::User).await?;
        let values: BTreeSet<String> = rows
            .iter()
            .filter_map(|row| row.get(column).and_then(serde_json::Value::as_str))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        Ok(values.into_iter().collect())
    }

    /// Assets of one style, optionally narrowed by type.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the request fails.
    pub async fn get_assets_by_style(
        &self,
        style: &str,
        asset_type: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<StorageAsset>, BackendError> {
        let options = AssetQuery::for_style(
            style,
            asset_type,
            limit.unwrap_or(DEFAULT_STYLE_LIMIT),
        );
        self.query_storage_assets(&options).await
    }

    /// Assets for hero slots.
    ///
    /// A hero style narrows to that style; anything else spreads `limit` across
    /// all hero styles.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if any per-style read fails.
    pub async fn get_hero_assets(
        &self,
        style: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<StorageAsset>, BackendError> {
        if let Some(hero) = style.and_then(HeroStyle::from_style) {
            return self.get_assets_by_style(hero.as_str(), None, limit).await;
        }
        let styles = HeroStyle::ALL.map(HeroStyle::as_str);
        self.fill_from_styles(&styles, limit.unwrap_or(DEFAULT_SELECTION_LIMIT))
            .await
    }

    /// Assets whose styles suit a content context (see [`context_styles`]).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if any per-style read fails.
    pub async fn get_assets_for_context(
        &self,
        context: &str,
        limit: Option<u32>,
    ) -> Result<Vec<StorageAsset>, BackendError> {
        self.fill_from_styles(
            context_styles(context),
            limit.unwrap_or(DEFAULT_SELECTION_LIMIT),
        )
        .await
    }

    async fn fill_from_styles(
        &self,
        styles: &[&str],
        limit: u32,
    ) -> Result<Vec<StorageAsset>, BackendError> {
        let share = per_style_limit(limit, styles.len());
        let mut assets = Vec::new();
        for style in styles {
            assets.extend(self.get_assets_by_style(style, None, Some(share)).await?);
        }
        assets.truncate(limit as usize);
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value_of<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn empty_options_only_select_and_order() {
        let pairs = storage_assets_query(&AssetQuery::default()).to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("select".to_string(), "*".to_string()),
                ("order".to_string(), "style.asc,description.asc".to_string()),
            ]
        );
    }

    #[test]
    fn all_filters_render() {
        let options = AssetQuery {
            style: Some("flowstate".into()),
            dimension: Some("16:9".into()),
            asset_type: Some("image".into()),
            search: Some("calm".into()),
            tags: vec!["flow".into(), "balance".into()],
            limit: Some(10),
            offset: Some(30),
        };
        let pairs = storage_assets_query(&options).to_query_pairs();
        assert_eq!(value_of(&pairs, "style"), Some("eq.flowstate"));
        assert_eq!(value_of(&pairs, "dimension"), Some("eq.16:9"));
        assert_eq!(value_of(&pairs, "type"), Some("eq.image"));
        assert_eq!(value_of(&pairs, "description"), Some("ilike.*calm*"));
        assert_eq!(value_of(&pairs, "tags"), Some("ov.{flow,balance}"));
        assert_eq!(value_of(&pairs, "limit"), Some("10"));
        assert_eq!(value_of(&pairs, "offset"), Some("30"));
    }

    #[test]
    fn offset_without_limit_uses_default_page() {
        let options = AssetQuery {
            offset: Some(40),
            ..AssetQuery::default()
        };
        let pairs = storage_assets_query(&options).to_query_pairs();
        assert_eq!(value_of(&pairs, "limit"), Some("20"));
        assert_eq!(value_of(&pairs, "offset"), Some("40"));
    }

    #[test]
    fn offset_near_u32_max_clamps_the_range() {
        let options = AssetQuery {
            offset: Some(u32::MAX - 5),
            limit: Some(20),
            ..AssetQuery::default()
        };
        let pairs = storage_assets_query(&options).to_query_pairs();
        assert_eq!(value_of(&pairs, "offset"), Some("4294967290"));
        assert_eq!(value_of(&pairs, "limit"), Some("6"));
    }

    #[test]
    fn context_mapping_is_case_insensitive_with_fallback() {
        assert_eq!(
            context_styles("Meditation"),
            &["neural_flower", "flowstate", "neural_flow"]
        );
        assert_eq!(context_styles("breakthrough")[0], "mindblock");
        assert_eq!(context_styles("unknown"), &["neural_flower", "flowstate"]);
    }

    #[test]
    fn per_style_share_rounds_up() {
        assert_eq!(per_style_limit(20, 3), 7);
        assert_eq!(per_style_limit(6, 3), 2);
        assert_eq!(per_style_limit(1, 3), 1);
        assert_eq!(per_style_limit(5, 0), 5);
    }
}

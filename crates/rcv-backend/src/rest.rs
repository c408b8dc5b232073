//! Relational reads: views, tables, and the recent-listens RPC.
//!
//! Not-found on a single-row read is `Ok(None)`; an empty result set is an
//! empty `Vec`. Every other backend error is returned as-is.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use rcv_core::entities::{
    ContentRegistryItem, FeedQueueItem, RecentListen, SoundbiteTrackByCode, SoundbiteTrackFrontend,
};
use rcv_core::requests::RecentListensArgs;

use crate::http::{check_rest_response, is_no_rows};
use crate::query::{Direction, Query};
use crate::{BackendClient, BackendError, Scope};

/// Media type asking the relational API for exactly one object.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub const TRACKS_FRONTEND_VIEW: &str = "v_soundbite_tracks_frontend";
pub const TRACKS_BY_CODE_VIEW: &str = "v_soundbite_tracks_by_code";
pub const FEED_QUEUE_TABLE: &str = "user_feed_queue_v2";
pub const CONTENT_REGISTRY_TABLE: &str = "content_registry";
pub const RECENT_LISTENS_RPC: &str = "list_recent_listens";

impl BackendClient {
    /// Run a read and decode every row.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        query: &Query,
        scope: Scope,
    ) -> Result<Vec<T>, BackendError> {
        let url = format!(
            "{}?{}",
            self.rest_url(query.table_name()),
            query.to_query_string()
        );
        tracing::debug!(table = query.table_name(), %url, "select");
        let resp = self
            .rest_request(Method::GET, &url, scope, query.table_name())?
            .send()
            .await?;
        let rows = check_rest_response(resp).await?.json::<Vec<T>>().await?;
        Ok(rows)
    }

    /// Run a read that must match at most one row.
    pub(crate) async fn select_single<T: DeserializeOwned>(
        &self,
        query: &Query,
        scope: Scope,
    ) -> Result<Option<T>, BackendError> {
        let url = format!(
            "{}?{}",
            self.rest_url(query.table_name()),
            query.to_query_string()
        );
        let resp = self
            .rest_request(Method::GET, &url, scope, query.table_name())?
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;
        match check_rest_response(resp).await {
            Ok(resp) => Ok(Some(resp.json::<T>().await?)),
            Err(error) if is_no_rows(&error) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// PATCH rows matched by `query`'s filters with `body`.
    pub(crate) async fn update<B: Serialize + Sync>(
        &self,
        query: &Query,
        body: &B,
        scope: Scope,
    ) -> Result<(), BackendError> {
        let url = format!(
            "{}?{}",
            self.rest_url(query.table_name()),
            query.to_query_string()
        );
        let resp = self
            .rest_request(Method::PATCH, &url, scope, query.table_name())?
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;
        check_rest_response(resp).await?;
        Ok(())
    }

    /// Call a remote procedure and decode its rows.
    pub(crate) async fn rpc<A: Serialize + Sync, T: DeserializeOwned>(
        &self,
        function: &str,
        args: &A,
    ) -> Result<Vec<T>, BackendError> {
        let url = self.rest_url(&format!("rpc/{function}"));
        let resp = self
            .rest_request(Method::POST, &url, Scope::User, function)?
            .json(args)
            .send()
            .await?;
        let body = check_rest_response(resp).await?.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Option<Vec<T>> = serde_json::from_str(&body)?;
        Ok(rows.unwrap_or_default())
    }

    /// Frontend projection of soundbite tracks.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the request fails or rows cannot be decoded.
    pub async fn fetch_soundbite_tracks_frontend(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<SoundbiteTrackFrontend>, BackendError> {
        let query = Query::table(TRACKS_FRONTEND_VIEW)
            .select("*")
            .limit(limit.unwrap_or(50));
        self.select(&query, Scope::User).await
    }

    /// Soundbite tracks keyed by code.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the request fails or rows cannot be decoded.
    pub async fn fetch_soundbite_tracks_by_code(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<SoundbiteTrackByCode>, BackendError> {
        let query = Query::table(TRACKS_BY_CODE_VIEW)
            .select("*")
            .limit(limit.unwrap_or(100));
        self.select(&query, Scope::User).await
    }

    /// The signed-in user's recent listens.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the RPC fails or rows cannot be decoded.
    pub async fn list_recent_listens(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<RecentListen>, BackendError> {
        let args = RecentListensArgs {
            limit: limit.unwrap_or(25),
        };
        self.rpc(RECENT_LISTENS_RPC, &args).await
    }

    /// Query for due, unsurfaced feed items: highest priority first, then
    /// oldest queued.
    #[must_use]
    pub fn feed_queue_query(now: DateTime<Utc>, limit: u32) -> Query {
        Query::table(FEED_QUEUE_TABLE)
            .select("*")
            .lte(
                "scheduled_for",
                &now.to_rfc3339_opts(SecondsFormat::Millis, true),
            )
            .is_null("surfaced_at")
            .order("priority", Direction::Desc)
            .order("queued_at", Direction::Asc)
            .limit(limit)
    }

    /// Read the feed queue directly (alternative to [`BackendClient::feed_pull`]).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the request fails or rows cannot be decoded.
    pub async fn fetch_feed_queue(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<FeedQueueItem>, BackendError> {
        let query = Self::feed_queue_query(Utc::now(), limit.unwrap_or(20));
        self.select(&query, Scope::User).await
    }

    /// Look up one content registry row.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] for any failure other than "no rows".
    pub async fn fetch_content_registry_by_id(
        &self,
        id: &str,
    ) -> Result<Option<ContentRegistryItem>, BackendError> {
        let query = Query::table(CONTENT_REGISTRY_TABLE)
            .select("*")
            .eq("id", id)
            .limit(1);
        self.select_single(&query, Scope::User).await
    }
}

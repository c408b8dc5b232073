//! # rcv-backend
//!
//! Client for the hosted backend-as-a-service behind the Recoverlution site.
//!
//! Translates typed operations into calls against:
//! - the relational REST surface (views, tables, one RPC) via [`query::Query`]
//! - serverless functions under `/functions/v1`
//! - public storage / CDN URLs via [`urls::AssetUrls`]
//!
//! The client is an explicit value built from [`rcv_config::BackendConfig`]
//! and passed to whoever needs it. It never retries: every network call
//! returns the parsed payload or a [`BackendError`].

pub mod assets;
pub mod functions;
pub mod governance;
pub mod poller;
pub mod query;
pub mod rest;
pub mod urls;

mod error;
mod http;

pub use error::BackendError;
pub use governance::{GovernanceOutcome, GovernanceReport, OutcomeStatus};
pub use poller::{FeedPoller, FeedTick};
pub use query::{Direction, Query};
pub use urls::AssetUrls;

use std::time::Duration;

use rcv_config::BackendConfig;

/// Which credential a request is made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// End-user session token if present, else the public key.
    User,
    /// Service-role key; refused when none is configured.
    Service,
}

/// HTTP client for the backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    public_key: String,
    service_key: Option<String>,
    session_token: Option<String>,
    urls: AssetUrls,
}

impl BackendClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Config`] if the URL or both keys are missing,
    /// or [`BackendError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("recoverlution-rcv/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            public_key: config.public_key().to_string(),
            service_key: config
                .has_service_key()
                .then(|| config.service_role_key.clone()),
            session_token: None,
            urls: AssetUrls::new(config.base_url(), config.cdn_base()),
        })
    }

    /// Replace the end-user session token (sign-in, refresh, sign-out).
    pub fn set_session_token(&mut self, token: Option<String>) {
        self.session_token = token.filter(|t| !t.is_empty());
    }

    /// Builder-style variant of [`BackendClient::set_session_token`].
    #[must_use]
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.set_session_token(Some(token.to_string()));
        self
    }

    /// Whether administrative operations are available.
    #[must_use]
    pub const fn has_service_credential(&self) -> bool {
        self.service_key.is_some()
    }

    /// Project URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL builder for public assets.
    #[must_use]
    pub const fn asset_urls(&self) -> &AssetUrls {
        &self.urls
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.base_url)
    }

    pub(crate) fn functions_url(&self, path: &str) -> String {
        format!("{}/functions/v1{path}", self.base_url)
    }

    /// `(apikey, bearer)` for a relational request.
    pub(crate) fn credentials(
        &self,
        scope: Scope,
        operation: &str,
    ) -> Result<(&str, &str), BackendError> {
        match scope {
            Scope::User => Ok((
                self.public_key.as_str(),
                self.session_token.as_deref().unwrap_or(&self.public_key),
            )),
            Scope::Service => {
                let key = self.service_key.as_deref().ok_or_else(|| {
                    BackendError::ServiceCredentialRequired {
                        operation: operation.to_string(),
                    }
                })?;
                Ok((key, key))
            }
        }
    }

    /// Start a relational request with credentials attached.
    pub(crate) fn rest_request(
        &self,
        method: reqwest::Method,
        url: &str,
        scope: Scope,
        operation: &str,
    ) -> Result<reqwest::RequestBuilder, BackendError> {
        let (apikey, bearer) = self.credentials(scope, operation)?;
        Ok(self
            .http
            .request(method, url)
            .header("apikey", apikey)
            .bearer_auth(bearer))
    }

    /// Start a serverless function request. The bearer is attached only when
    /// a session token is present.
    pub(crate) fn function_request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::RequestBuilder {
        let request = self
            .http
            .request(method, self.functions_url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig {
            url: "https://proj.supabase.co/".into(),
            anon_key: "anon".into(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn new_rejects_incomplete_config() {
        let err = BackendClient::new(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, BackendError::Config(_)));
    }

    #[test]
    fn bases_are_derived_from_url() {
        let client = BackendClient::new(&config()).unwrap();
        assert_eq!(client.base_url(), "https://proj.supabase.co");
        assert_eq!(
            client.rest_url("storage_assets"),
            "https://proj.supabase.co/rest/v1/storage_assets"
        );
        assert_eq!(
            client.functions_url("/events-api"),
            "https://proj.supabase.co/functions/v1/events-api"
        );
    }

    #[test]
    fn user_scope_prefers_session_token() {
        let client = BackendClient::new(&config()).unwrap();
        assert_eq!(client.credentials(Scope::User, "read").unwrap(), ("anon", "anon"));

        let client = client.with_session_token("jwt-123");
        assert_eq!(
            client.credentials(Scope::User, "read").unwrap(),
            ("anon", "jwt-123")
        );
    }

    #[test]
    fn empty_session_token_is_cleared() {
        let mut client = BackendClient::new(&config()).unwrap();
        client.set_session_token(Some(String::new()));
        assert_eq!(client.credentials(Scope::User, "read").unwrap().1, "anon");
    }

    #[test]
    fn service_scope_requires_service_key() {
        let client = BackendClient::new(&config()).unwrap();
        assert!(!client.has_service_credential());
        let err = client.credentials(Scope::Service, "governance sync").unwrap_err();
        assert_eq!(err.to_string(), "service key required for governance sync");

        let client = BackendClient::new(&BackendConfig {
            service_role_key: "svc".into(),
            ..config()
        })
        .unwrap();
        assert_eq!(
            client.credentials(Scope::Service, "governance sync").unwrap(),
            ("svc", "svc")
        );
    }
}

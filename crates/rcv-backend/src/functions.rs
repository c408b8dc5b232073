//! Serverless function calls.
//!
//! Each function is JSON in / JSON out under `/functions/v1`. A non-2xx status
//! becomes [`BackendError::Function`] carrying the function name, status code,
//! and response body. There is no retry.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use rcv_core::entities::{FeedQueueItem, UserAudioItem};
use rcv_core::requests::{
    DeleteAudioRequest, EventRecord, FeedPullRequest, GenerateUploadUrlRequest,
    RenameAudioRequest, SignDownloadUrlRequest,
};
use rcv_core::responses::{GenerateUploadUrlResponse, SignedDownloadUrlResponse};

use crate::http::check_function_response;
use crate::{BackendClient, BackendError};

pub const SIGN_DOWNLOAD_URL: &str = "sign-download-url";
pub const GENERATE_UPLOAD_URL: &str = "generate-upload-url";
pub const LIST_USER_AUDIO: &str = "list-user-audio";
pub const RENAME_USER_AUDIO: &str = "rename-user-audio";
pub const DELETE_USER_AUDIO: &str = "delete-user-audio";
pub const EVENTS_API: &str = "events-api";
pub const FEED_PULL: &str = "v1_feed_pull";

impl BackendClient {
    async fn post_function<B: Serialize + Sync>(
        &self,
        function: &str,
        body: &B,
    ) -> Result<reqwest::Response, BackendError> {
        tracing::debug!(function, "calling serverless function");
        let resp = self
            .function_request(Method::POST, &format!("/{function}"))
            .json(body)
            .send()
            .await?;
        check_function_response(function, resp).await
    }

    async fn post_function_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        function: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let resp = self.post_function(function, body).await?;
        Ok(resp.json::<T>().await?)
    }

    /// Mint a temporary download URL for a stored object.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn sign_download_url(
        &self,
        request: &SignDownloadUrlRequest,
    ) -> Result<SignedDownloadUrlResponse, BackendError> {
        self.post_function_json(SIGN_DOWNLOAD_URL, request).await
    }

    /// Mint a temporary upload URL.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn generate_upload_url(
        &self,
        request: &GenerateUploadUrlRequest,
    ) -> Result<GenerateUploadUrlResponse, BackendError> {
        self.post_function_json(GENERATE_UPLOAD_URL, request).await
    }

    /// List audio objects under `prefix` in the user's storage.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn list_user_audio(&self, prefix: &str) -> Result<Vec<UserAudioItem>, BackendError> {
        let path = format!("/{LIST_USER_AUDIO}?prefix={}", urlencoding::encode(prefix));
        let resp = self.function_request(Method::GET, &path).send().await?;
        let resp = check_function_response(LIST_USER_AUDIO, resp).await?;
        Ok(resp.json::<Vec<UserAudioItem>>().await?)
    }

    /// Rename one of the user's audio objects.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn rename_user_audio(&self, request: &RenameAudioRequest) -> Result<(), BackendError> {
        self.post_function(RENAME_USER_AUDIO, request).await?;
        Ok(())
    }

    /// Delete one of the user's audio objects.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn delete_user_audio(&self, request: &DeleteAudioRequest) -> Result<(), BackendError> {
        self.post_function(DELETE_USER_AUDIO, request).await?;
        Ok(())
    }

    /// Record a structured event.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn log_event(&self, event: &EventRecord) -> Result<(), BackendError> {
        self.post_function(EVENTS_API, event).await?;
        Ok(())
    }

    /// Pull the next feed items through the feed function.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Function`] on a non-success status.
    pub async fn feed_pull(
        &self,
        request: &FeedPullRequest,
    ) -> Result<Vec<FeedQueueItem>, BackendError> {
        self.post_function_json(FEED_PULL, request).await
    }
}

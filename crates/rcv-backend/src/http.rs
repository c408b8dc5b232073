//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so the table, RPC, and function modules stay
//! focused on request construction and response mapping.
//! - relational API errors carry a JSON body with `code` and `message`
//!   → [`BackendError::Rest`], falling back to [`BackendError::Api`]
//! - serverless functions → [`BackendError::Function`] with the raw body

use serde::Deserialize;

use crate::error::BackendError;

/// Error code the relational API returns when a single-object request matched
/// no rows.
pub const NO_ROWS_CODE: &str = "PGRST116";

#[derive(Debug, Deserialize)]
struct RestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Check a relational API response for error status.
///
/// Returns the response unchanged on success.
pub async fn check_rest_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(rest_error(status.as_u16(), &body))
}

/// Check a serverless function response, naming the function in the error.
pub async fn check_function_response(
    function: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    Err(BackendError::Function {
        function: function.to_string(),
        status: resp.status().as_u16(),
        body: resp.text().await.unwrap_or_default(),
    })
}

/// Map an error body to [`BackendError::Rest`] when it has a `code`, else
/// [`BackendError::Api`].
fn rest_error(status: u16, body: &str) -> BackendError {
    match serde_json::from_str::<RestErrorBody>(body) {
        Ok(RestErrorBody {
            code: Some(code),
            message,
            details,
        }) => {
            let mut message = message.unwrap_or_default();
            if let Some(details) = details.filter(|d| !d.is_empty()) {
                message = format!("{message} ({details})");
            }
            BackendError::Rest {
                status,
                code,
                message,
            }
        }
        _ => BackendError::Api {
            status,
            message: body.to_string(),
        },
    }
}

/// Whether an error is the "no rows for single object" signal.
#[must_use]
pub fn is_no_rows(error: &BackendError) -> bool {
    matches!(error, BackendError::Rest { code, .. } if code == NO_ROWS_CODE)
}

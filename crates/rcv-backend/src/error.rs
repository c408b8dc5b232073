//! Backend error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Configuration was incomplete when the client was built.
    #[error(transparent)]
    Config(#[from] rcv_config::ConfigError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relational API returned a structured error body.
    #[error("REST error ({status}) {code}: {message}")]
    Rest {
        /// HTTP status code.
        status: u16,
        /// Backend error code (e.g., `PGRST116`, `42P01`).
        code: String,
        /// Backend error message.
        message: String,
    },

    /// The backend returned a non-success status without a structured body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// A serverless function returned a non-success status.
    #[error("{function} failed: {status} {body}")]
    Function {
        /// Function name, e.g. `sign-download-url`.
        function: String,
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The operation needs the service-role key and none is configured.
    #[error("service key required for {operation}")]
    ServiceCredentialRequired {
        /// Operation that was refused.
        operation: String,
    },

    /// Failed to encode a request or decode a response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl BackendError {
    /// HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest { status, .. } | Self::Api { status, .. } | Self::Function { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

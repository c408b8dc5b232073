use thiserror::Error;

/// Failures while loading or validating [`crate::RcvConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A setting the backend client cannot work without is empty.
    #[error("missing configuration value '{field}': {hint}")]
    MissingValue { field: String, hint: String },

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

//! Errors raised while interpreting core records.
//!
//! Transport and configuration failures have their own enums in `rcv-backend`
//! and `rcv-config`; the CLI folds all of them into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name any variant of a wire enum.
    #[error("unknown {kind} '{value}' (expected {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

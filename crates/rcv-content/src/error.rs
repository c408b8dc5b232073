use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot {action} from step {step}")]
    InvalidTransition { step: String, action: String },

    #[error("scenario {scenario} has no choice {choice}")]
    UnknownChoice { scenario: String, choice: usize },

    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

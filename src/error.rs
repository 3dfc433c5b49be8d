//! Error types for the ranking core.

use thiserror::Error;

/// Errors produced by the preference-aggregation core.
#[derive(Debug, Error)]
pub enum RankError {
    /// Input violated a documented precondition (domain or value constraint).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Array dimensions did not line up.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// The rejection-sampling generator hit its attempt cap without
    /// producing a matrix containing an intransitive cycle.
    #[error("no non-transitive pairwise matrix found after {attempts} attempts")]
    NonTransitiveGenerationFailed { attempts: usize },

    /// Prediction was requested before `fit`.
    #[error("model has not been fitted; call fit() first")]
    NotFitted,
}

/// Result type for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;

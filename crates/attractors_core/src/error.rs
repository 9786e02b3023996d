use thiserror::Error;

/// Errors surfaced by attractor construction and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttractorError {
    /// Invalid construction arguments, reported before any integration work.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The solver could not advance the trajectory within its tolerances or budget.
    #[error("Integration failed at t = {time}: {reason}")]
    IntegrationFailure { time: f64, reason: String },

    /// A state vector does not match the dimension of the vector field.
    #[error("Dimension mismatch. Expected {expected}, got {got}.")]
    DimensionMismatch { expected: usize, got: usize },
}

impl AttractorError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        AttractorError::Configuration(message.into())
    }

    pub(crate) fn integration(time: f64, reason: impl Into<String>) -> Self {
        AttractorError::IntegrationFailure {
            time,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttractorError>;

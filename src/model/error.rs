//! Model error types

use thiserror::Error;

/// Errors that can occur when mutating the hazard model
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// A required alert field was empty
    #[error("Validation error: {0} must not be empty")]
    Validation(&'static str),
}

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

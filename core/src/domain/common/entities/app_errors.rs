use thiserror::Error;

use crate::domain::food_lens::value_objects::FoodLensOperation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Completion service unavailable: {0}")]
    TransientFailure(String),

    #[error("Completion service returned no text")]
    EmptyResponse,

    #[error("No JSON payload found in completion text")]
    ExtractionFailure,

    #[error("Malformed completion payload: {0}")]
    MalformedResponse(String),

    #[error("Completion payload violates schema: {0}")]
    SchemaMismatch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{}", .0.failure_message())]
    OperationFailed(FoodLensOperation),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Local defaults may replace the failure with an empty result.
    pub fn is_recoverable_as_empty(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyResponse
                | CoreError::ExtractionFailure
                | CoreError::MalformedResponse(_)
        )
    }
}

//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while answering or scoring the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Scoring requested before every question was answered.
    #[error("Assessment incomplete: {answered} of {required} questions answered")]
    Incomplete {
        answered: usize,
        required: usize,
        missing: Vec<String>,
    },

    /// An answer references a question the questionnaire does not contain.
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// An answer weight that no option carries.
    #[error("Invalid weight {weight} for question '{question}'")]
    InvalidWeight { question: String, weight: u8 },

    /// The attempt already has a result; retake to answer again.
    #[error("Assessment already complete")]
    AlreadyComplete,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::Incomplete { .. } => ErrorCode::AssessmentIncomplete,
            AssessmentError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            AssessmentError::InvalidWeight { .. } => ErrorCode::OutOfRange,
            AssessmentError::AlreadyComplete => ErrorCode::AssessmentComplete,
            AssessmentError::Validation(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

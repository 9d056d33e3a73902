use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised by the guidance wizards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuidanceError {
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    #[error("Action only available on the {expected} step")]
    WrongStep { expected: &'static str },

    #[error("Select at least one goal")]
    NoGoalsSelected,
}

impl GuidanceError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        GuidanceError::UnknownOption {
            kind,
            value: value.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GuidanceError::UnknownOption { .. } => ErrorCode::InvalidFormat,
            GuidanceError::WrongStep { .. } => ErrorCode::InvalidStateTransition,
            GuidanceError::NoGoalsSelected => ErrorCode::ValidationFailed,
        }
    }
}

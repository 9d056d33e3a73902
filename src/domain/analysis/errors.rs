//! Errors raised while analyzing a report.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Failure modes of a report analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Analyzer backend is unavailable.
    #[error("analyzer unavailable: {message}")]
    Unavailable { message: String },

    /// Backend rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Backend answered with something that is not a report.
    #[error("invalid analyzer response: {0}")]
    InvalidResponse(String),
}

impl AnalysisError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        AnalysisError::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        AnalysisError::Network(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        AnalysisError::InvalidResponse(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::AnalysisFailed
    }
}

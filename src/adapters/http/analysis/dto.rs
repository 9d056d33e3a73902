//! DTOs for the report analysis endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::FileType;

/// Body of `POST /api/analyze-report`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReportRequest {
    #[serde(default)]
    pub base64_data: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
}

impl AnalyzeReportRequest {
    /// "pdf" is a PDF; anything else, or nothing, is an image.
    pub fn file_type(&self) -> FileType {
        match self.file_type.as_deref() {
            Some(t) if t.eq_ignore_ascii_case("pdf") => FileType::Pdf,
            _ => FileType::Image,
        }
    }
}

/// Error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub const NO_FILE_DATA: &'static str = "No file data provided";
    pub const ANALYSIS_FAILED: &'static str = "Failed to analyze report";

    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn no_file_data() -> Self {
        Self::new(Self::NO_FILE_DATA)
    }

    pub fn analysis_failed() -> Self {
        Self::new(Self::ANALYSIS_FAILED)
    }
}

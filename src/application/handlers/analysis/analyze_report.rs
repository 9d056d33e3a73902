//! AnalyzeReportHandler - Command handler for the report analysis endpoint.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::analysis::{AnalysisError, AnalysisReport, FileType};
use crate::domain::foundation::ErrorCode;
use crate::ports::ReportAnalyzer;

/// Command to analyze an uploaded report.
#[derive(Debug, Clone)]
pub struct AnalyzeReportCommand {
    /// Base64 file contents, optionally as a `data:` URL.
    pub base64_data: Option<String>,
    pub file_type: FileType,
}

/// Errors from report analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeReportError {
    #[error("No file data provided")]
    MissingFileData,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl AnalyzeReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalyzeReportError::MissingFileData => ErrorCode::MissingFileData,
            AnalyzeReportError::Analysis(err) => err.code(),
        }
    }
}

/// Drops a `data:<mime>;base64,` prefix if present.
pub fn strip_data_url(data: &str) -> &str {
    if data.starts_with("data:") {
        if let Some((_, payload)) = data.split_once(',') {
            return payload;
        }
    }
    data
}

/// Bytes handed to the analyzer.
///
/// Standard base64 is decoded; anything else is passed through as its raw
/// UTF-8 bytes. Decoding never rejects an upload.
pub fn payload_bytes(data: &str) -> Vec<u8> {
    let encoded = strip_data_url(data);
    match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "payload is not base64, passing raw bytes");
            encoded.as_bytes().to_vec()
        }
    }
}

/// Handler for analyzing reports.
pub struct AnalyzeReportHandler {
    analyzer: Arc<dyn ReportAnalyzer>,
}

impl AnalyzeReportHandler {
    pub fn new(analyzer: Arc<dyn ReportAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeReportCommand,
    ) -> Result<AnalysisReport, AnalyzeReportError> {
        // 1. Require a payload
        let data = cmd
            .base64_data
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(AnalyzeReportError::MissingFileData)?;

        // 2. Decode
        let payload = payload_bytes(data);

        // 3. Analyze
        tracing::info!(
            analyzer = self.analyzer.name(),
            file_type = %cmd.file_type,
            bytes = payload.len(),
            "analyzing report"
        );
        let report = self.analyzer.analyze(&payload, cmd.file_type).await?;

        Ok(report)
    }
}

//! Report Analyzer Port - Interface for medical report analysis backends.
//!
//! The HTTP endpoint and the analyzer screen only see this trait. The
//! default implementation serves canned reports; a remote implementation
//! forwards the payload to an inference service.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EmptyAnalyzer;
//!
//! #[async_trait]
//! impl ReportAnalyzer for EmptyAnalyzer {
//!     async fn analyze(&self, _payload: &[u8], _file_type: FileType)
//!         -> Result<AnalysisReport, AnalysisError> {
//!         Err(AnalysisError::unavailable("not configured"))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "empty"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::analysis::{AnalysisError, AnalysisReport, FileType};

/// Port for report analysis.
///
/// Implementations must not retain the payload after returning.
#[async_trait]
pub trait ReportAnalyzer: Send + Sync {
    /// Analyzes decoded file bytes and returns a structured report.
    async fn analyze(
        &self,
        payload: &[u8],
        file_type: FileType,
    ) -> Result<AnalysisReport, AnalysisError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

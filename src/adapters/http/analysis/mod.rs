//! HTTP adapter for report analysis.
//!
//! Endpoints:
//! - `POST /api/analyze-report` - Analyze an uploaded medical report

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeReportRequest, ErrorResponse};
pub use handlers::{analyze_report, AnalysisHandlers};
pub use routes::analysis_routes;

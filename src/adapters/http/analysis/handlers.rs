//! HTTP handlers for report analysis.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::analysis::{
    AnalyzeReportCommand, AnalyzeReportError, AnalyzeReportHandler,
};

use super::dto::{AnalyzeReportRequest, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    analyze_handler: Arc<AnalyzeReportHandler>,
}

impl AnalysisHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeReportHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze-report - Analyze an uploaded medical report
pub async fn analyze_report(
    State(handlers): State<AnalysisHandlers>,
    body: Result<Json<AnalyzeReportRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::error!(error = %rejection, "analysis request body rejected");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::analysis_failed()),
            )
                .into_response();
        }
    };

    let cmd = AnalyzeReportCommand {
        file_type: req.file_type(),
        base64_data: req.base64_data,
    };

    match handlers.analyze_handler.handle(cmd).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_analysis_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_analysis_error(error: AnalyzeReportError) -> Response {
    match error {
        AnalyzeReportError::MissingFileData => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::no_file_data()),
        )
            .into_response(),
        AnalyzeReportError::Analysis(err) => {
            tracing::error!(error = %err, code = %err.code(), "analysis error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::analysis_failed()),
            )
                .into_response()
        }
    }
}

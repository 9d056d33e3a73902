//! HTTP routes for report analysis.

use axum::{routing::post, Router};

use super::handlers::{analyze_report, AnalysisHandlers};

/// Creates the analysis router, mounted under `/api`.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/analyze-report", post(analyze_report))
        .with_state(handlers)
}

//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`app_router`] mounts them under `/api` and adds the shared layers.

pub mod analysis;

pub use analysis::{analysis_routes, AnalysisHandlers};

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use ::http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::analysis::AnalyzeReportHandler;
use crate::config::{AppConfig, ServerConfig};
use crate::ports::ReportAnalyzer;

/// Builds the full application router.
pub fn app_router(analyzer: Arc<dyn ReportAnalyzer>, config: &AppConfig) -> Router {
    let analyze_handler = Arc::new(AnalyzeReportHandler::new(analyzer));
    let api = analysis_routes(AnalysisHandlers::new(analyze_handler))
        .layer(DefaultBodyLimit::max(config.analysis.request_body_limit()));

    Router::new().nest("/api", api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server))
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    )
}

/// CORS from `server.cors_origins`; permissive outside production when unset.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::permissive()
        }
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}

//! Report Analyzer Adapters.
//!
//! - `MockReportAnalyzer` - canned reports, selectable at random, fixed, or in turn
//! - `RemoteReportAnalyzer` - HTTP inference service

mod canned_reports;
mod mock_analyzer;
mod remote_analyzer;

pub use canned_reports::CANNED_REPORTS;
pub use mock_analyzer::{MockReportAnalyzer, Selection};
pub use remote_analyzer::{RemoteAnalyzerConfig, RemoteReportAnalyzer};

use std::sync::Arc;

use crate::config::{AnalysisConfig, AnalysisProvider};
use crate::domain::analysis::AnalysisError;
use crate::ports::ReportAnalyzer;

/// The mock the service runs with: random selection, no call log.
pub fn service_mock() -> MockReportAnalyzer {
    MockReportAnalyzer::new()
}

/// Builds the analyzer selected by configuration.
pub fn analyzer_from_config(
    config: &AnalysisConfig,
) -> Result<Arc<dyn ReportAnalyzer>, AnalysisError> {
    match config.provider {
        AnalysisProvider::Mock => Ok(Arc::new(service_mock())),
        AnalysisProvider::Remote => {
            let endpoint = config
                .endpoint
                .clone()
                .ok_or_else(|| AnalysisError::unavailable("no analysis endpoint configured"))?;
            let mut remote = RemoteAnalyzerConfig::new(endpoint).with_timeout(config.timeout());
            if let Some(key) = &config.api_key {
                remote = remote.with_api_key(key.clone());
            }
            Ok(Arc::new(RemoteReportAnalyzer::new(remote)?))
        }
    }
}

//! Remote Report Analyzer - forwards reports to an inference service.
//!
//! The service receives the same JSON body the `/api/analyze-report`
//! endpoint accepts and must answer with an `AnalysisReport`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RemoteAnalyzerConfig::new("https://inference.internal/analyze")
//!     .with_api_key(key)
//!     .with_timeout(Duration::from_secs(20));
//!
//! let analyzer = RemoteReportAnalyzer::new(config)?;
//! ```

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::analysis::{AnalysisError, AnalysisReport, FileType};
use crate::ports::ReportAnalyzer;

/// Configuration for the remote analyzer.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzerConfig {
    /// Full URL the report is posted to.
    pub endpoint: String,
    /// Bearer token, if the service requires one.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl RemoteAnalyzerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct RemoteRequest {
    base64_data: String,
    file_type: FileType,
}

/// Report analyzer backed by an HTTP inference service.
pub struct RemoteReportAnalyzer {
    config: RemoteAnalyzerConfig,
    client: Client,
}

impl RemoteReportAnalyzer {
    pub fn new(config: RemoteAnalyzerConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::unavailable(format!("failed to build http client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn build_request(payload: &[u8], file_type: FileType) -> RemoteRequest {
        RemoteRequest {
            base64_data: STANDARD.encode(payload),
            file_type,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> AnalysisError {
        if e.is_timeout() {
            AnalysisError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            AnalysisError::network(format!("Connection failed: {}", e))
        } else {
            AnalysisError::network(e.to_string())
        }
    }

    /// Maps a non-success status to an error.
    fn status_error(status: StatusCode, body: &str) -> AnalysisError {
        match status.as_u16() {
            401 | 403 => AnalysisError::AuthenticationFailed,
            500..=599 => AnalysisError::unavailable(format!("Server error {}: {}", status, body)),
            _ => AnalysisError::invalid_response(format!("Unexpected status {}: {}", status, body)),
        }
    }
}

#[async_trait]
impl ReportAnalyzer for RemoteReportAnalyzer {
    async fn analyze(
        &self,
        payload: &[u8],
        file_type: FileType,
    ) -> Result<AnalysisReport, AnalysisError> {
        let body = Self::build_request(payload, file_type);

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("Authorization", format!("Bearer {}", key.expose_secret()));
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, endpoint = %self.config.endpoint, "analyzer returned error status");
            return Err(Self::status_error(status, &error_body));
        }

        response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| AnalysisError::invalid_response(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = RemoteAnalyzerConfig::new("http://localhost:9000/analyze");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.has_api_key());
    }

    #[test]
    fn config_debug_redacts_api_key() {
        let config = RemoteAnalyzerConfig::new("http://localhost")
            .with_api_key(Secret::new("sk-very-secret".to_string()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret"));
        assert!(config.has_api_key());
    }

    #[test]
    fn request_body_matches_endpoint_contract() {
        let body = RemoteReportAnalyzer::build_request(b"hello", FileType::Pdf);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["base64Data"], "aGVsbG8=");
        assert_eq!(json["fileType"], "pdf");
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert_eq!(
            RemoteReportAnalyzer::status_error(StatusCode::UNAUTHORIZED, ""),
            AnalysisError::AuthenticationFailed
        );
        assert!(matches!(
            RemoteReportAnalyzer::status_error(StatusCode::BAD_GATEWAY, "x"),
            AnalysisError::Unavailable { .. }
        ));
        assert!(matches!(
            RemoteReportAnalyzer::status_error(StatusCode::NOT_FOUND, "x"),
            AnalysisError::InvalidResponse(_)
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let analyzer = RemoteReportAnalyzer::new(
            RemoteAnalyzerConfig::new("http://127.0.0.1:1/analyze")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        let err = analyzer.analyze(b"x", FileType::Image).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Network(_) | AnalysisError::Timeout { .. }
        ));
    }
}

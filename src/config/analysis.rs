//! Report analysis configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::analysis::MAX_UPLOAD_BYTES;

/// Report analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Which analyzer serves requests
    #[serde(default)]
    pub provider: AnalysisProvider,

    /// Inference endpoint (remote provider only)
    pub endpoint: Option<String>,

    /// Bearer token for the inference endpoint
    pub api_key: Option<Secret<String>>,

    /// Remote request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Largest accepted file before base64 encoding
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

/// Analyzer implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisProvider {
    #[default]
    Mock,
    Remote,
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Request body limit: the upload limit after base64 expansion plus
    /// room for the JSON envelope.
    ///
    /// Saturates at `usize::MAX` for very large limits.
    pub fn request_body_limit(&self) -> usize {
        let encoded = self.max_upload_bytes.div_ceil(3).saturating_mul(4);
        usize::try_from(encoded.saturating_add(64 * 1024)).unwrap_or(usize::MAX)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_upload_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        if self.provider == AnalysisProvider::Remote {
            let endpoint = self
                .endpoint
                .as_deref()
                .filter(|e| !e.is_empty())
                .ok_or(ValidationError::MissingRequired("ANALYSIS__ENDPOINT"))?;
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidAnalysisEndpoint);
            }
            if self.timeout_secs == 0 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            provider: AnalysisProvider::default(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_upload_bytes() -> u64 {
    MAX_UPLOAD_BYTES
}

//! Analyzer screen flow.
//!
//! ```text
//! Idle ──select──► Uploading ──read──► Analyzing ─┬─► Results
//!   ▲                  │                          ├─► NoParameters
//!   └──────clear───────┴──────────────────────────┴─► Failed
//! ```
//!
//! A file refused by the upload gate leaves the phase where it was and only
//! sets the error banner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AnalysisError, AnalysisReport, FileType, UploadCandidate, UploadError};
use crate::domain::foundation::{StateMachine, ValidationError};

/// Banner shown when the analyzer returned no parameters.
pub const NO_PARAMETERS_MESSAGE: &str =
    "No medical parameters could be extracted from this image. Please upload a clear medical report.";

/// Banner shown when the analysis request failed.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze the report. Please try again with a clearer image.";

/// Banner shown when the file could not be read.
pub const READ_FAILED_MESSAGE: &str = "Failed to read the file.";

/// Phase of the analyzer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyzerPhase {
    #[default]
    Idle,
    Uploading,
    Analyzing,
    Results,
    NoParameters,
    Failed,
}

impl AnalyzerPhase {
    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalyzerPhase::Uploading | AnalyzerPhase::Analyzing)
    }
}

impl StateMachine for AnalyzerPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AnalyzerPhase::*;
        matches!(
            (self, target),
            (Idle, Uploading)
                | (Uploading, Analyzing)
                | (Uploading, Failed)
                | (Analyzing, Results)
                | (Analyzing, NoParameters)
                | (Analyzing, Failed)
                | (Results, Idle)
                | (NoParameters, Idle)
                | (NoParameters, Uploading)
                | (Failed, Idle)
                | (Failed, Uploading)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AnalyzerPhase::*;
        match self {
            Idle => vec![Uploading],
            Uploading => vec![Analyzing, Failed],
            Analyzing => vec![Results, NoParameters, Failed],
            Results => vec![Idle],
            NoParameters => vec![Idle, Uploading],
            Failed => vec![Idle, Uploading],
        }
    }
}

/// Errors raised by the analyzer flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Rejected(#[from] UploadError),

    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),
}

/// State of the analyzer screen.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerFlow {
    phase: AnalyzerPhase,
    file: Option<UploadCandidate>,
    error: Option<String>,
    report: Option<AnalysisReport>,
}

impl AnalyzerFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AnalyzerPhase {
        self.phase
    }

    pub fn file(&self) -> Option<&UploadCandidate> {
        self.file.as_ref()
    }

    /// Current error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Runs the upload gate and starts uploading an accepted file.
    pub fn select_file(&mut self, file: UploadCandidate) -> Result<FileType, FlowError> {
        self.error = None;
        let file_type = match file.validate() {
            Ok(file_type) => file_type,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err.into());
            }
        };
        self.phase = self.phase.transition_to(AnalyzerPhase::Uploading)?;
        tracing::debug!(name = %file.name, file_type = %file_type, "upload started");
        self.file = Some(file);
        Ok(file_type)
    }

    /// The file was read and the request sent.
    pub fn payload_read(&mut self) -> Result<(), FlowError> {
        self.phase = self.phase.transition_to(AnalyzerPhase::Analyzing)?;
        Ok(())
    }

    /// The file could not be read.
    pub fn read_failed(&mut self) -> Result<(), FlowError> {
        self.phase = self.phase.transition_to(AnalyzerPhase::Failed)?;
        self.error = Some(READ_FAILED_MESSAGE.to_string());
        Ok(())
    }

    /// Applies the analyzer's answer.
    pub fn complete(
        &mut self,
        outcome: Result<AnalysisReport, AnalysisError>,
    ) -> Result<AnalyzerPhase, FlowError> {
        let (next, report, error) = match outcome {
            Ok(report) if report.has_parameters() => (AnalyzerPhase::Results, Some(report), None),
            Ok(_) => (
                AnalyzerPhase::NoParameters,
                None,
                Some(NO_PARAMETERS_MESSAGE.to_string()),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "report analysis failed");
                (
                    AnalyzerPhase::Failed,
                    None,
                    Some(ANALYSIS_FAILED_MESSAGE.to_string()),
                )
            }
        };
        self.phase = self.phase.transition_to(next)?;
        self.report = report;
        self.error = error;
        Ok(self.phase)
    }

    /// Clears the selected file and banner and returns to idle.
    pub fn clear(&mut self) -> Result<(), FlowError> {
        if self.phase != AnalyzerPhase::Idle {
            self.phase = self.phase.transition_to(AnalyzerPhase::Idle)?;
        }
        self.file = None;
        self.error = None;
        self.report = None;
        Ok(())
    }
}

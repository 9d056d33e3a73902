//! Mock Report Analyzer - serves canned reports without looking at the file.
//!
//! # Example
//!
//! ```ignore
//! let analyzer = MockReportAnalyzer::new().with_selection(Selection::Fixed(2));
//! let report = analyzer.analyze(&bytes, FileType::Image).await?;
//! assert_eq!(report.report_type, "Thyroid Function");
//! ```

use async_trait::async_trait;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use super::CANNED_REPORTS;
use crate::domain::analysis::{AnalysisError, AnalysisReport, FileType};
use crate::ports::ReportAnalyzer;

/// How the mock picks among its reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniformly at random on every call.
    #[default]
    Random,
    /// Always the report at this index (wrapped to the report count).
    Fixed(usize),
    /// Each report in turn.
    RoundRobin,
}

/// Analyzer returning one of a fixed set of reports.
#[derive(Debug, Clone)]
pub struct MockReportAnalyzer {
    reports: Arc<Vec<AnalysisReport>>,
    selection: Selection,
    cursor: Arc<AtomicUsize>,
    delay: Duration,
    failure: Option<AnalysisError>,
    call_count: Arc<AtomicUsize>,
    /// Per-call log, kept only after `with_call_recording`.
    calls: Option<Arc<Mutex<Vec<(usize, FileType)>>>>,
}

impl Default for MockReportAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockReportAnalyzer {
    /// Analyzer over the three canned reports with random selection.
    pub fn new() -> Self {
        Self::with_reports(CANNED_REPORTS.clone())
    }

    /// Analyzer over a custom report set.
    pub fn with_reports(reports: Vec<AnalysisReport>) -> Self {
        Self {
            reports: Arc::new(reports),
            selection: Selection::default(),
            cursor: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
            failure: None,
            call_count: Arc::new(AtomicUsize::new(0)),
            calls: None,
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every call fail with this error.
    pub fn with_failure(mut self, error: AnalysisError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Keeps the payload size and file type of every call.
    ///
    /// The log is unbounded, so only tests turn it on.
    pub fn with_call_recording(mut self) -> Self {
        self.calls = Some(Arc::new(Mutex::new(Vec::new())));
        self
    }

    pub fn reports(&self) -> &[AnalysisReport] {
        &self.reports
    }

    pub fn is_recording(&self) -> bool {
        self.calls.is_some()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Payload sizes and file types of the recorded calls.
    ///
    /// Empty unless call recording is on.
    pub fn calls(&self) -> Vec<(usize, FileType)> {
        self.calls
            .as_ref()
            .and_then(|calls| calls.lock().ok().map(|c| c.clone()))
            .unwrap_or_default()
    }

    fn pick(&self) -> usize {
        let len = self.reports.len();
        match self.selection {
            Selection::Random => rand::thread_rng().gen_range(0..len),
            Selection::Fixed(index) => index % len,
            Selection::RoundRobin => self.cursor.fetch_add(1, Ordering::Relaxed) % len,
        }
    }
}

#[async_trait]
impl ReportAnalyzer for MockReportAnalyzer {
    async fn analyze(
        &self,
        payload: &[u8],
        file_type: FileType,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Some(Ok(mut calls)) = self.calls.as_ref().map(|c| c.lock()) {
            calls.push((payload.len(), file_type));
        }

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if self.reports.is_empty() {
            return Err(AnalysisError::unavailable("no reports configured"));
        }

        let index = self.pick();
        tracing::debug!(index, file_type = %file_type, "serving canned report");
        Ok(self.reports[index].clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

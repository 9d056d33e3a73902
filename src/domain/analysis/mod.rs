//! Analysis module - report types, the upload gate, and the analyzer screen flow.
//!
//! The analyzer itself sits behind the `ReportAnalyzer` port; this module
//! only holds the data it exchanges and the client-side rules around it.

mod errors;
mod flow;
mod report;
mod upload;

pub use errors::AnalysisError;
pub use flow::{
    AnalyzerFlow, AnalyzerPhase, FlowError, ANALYSIS_FAILED_MESSAGE, NO_PARAMETERS_MESSAGE,
    READ_FAILED_MESSAGE,
};
pub use report::{
    AnalysisReport, FileType, ParameterStatus, ReportFeedback, ReportParameter,
    DEFAULT_REPORT_TYPE,
};
pub use upload::{
    validate_upload, UploadCandidate, UploadError, ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES,
    MAX_UPLOAD_BYTES,
};

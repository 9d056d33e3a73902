//! Analysis command handlers.

mod analyze_report;

pub use analyze_report::{
    payload_bytes, strip_data_url, AnalyzeReportCommand, AnalyzeReportError, AnalyzeReportHandler,
};

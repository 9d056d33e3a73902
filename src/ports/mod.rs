//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportAnalyzer` - analysis of uploaded medical reports

mod report_analyzer;

pub use report_analyzer::ReportAnalyzer;

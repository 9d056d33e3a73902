//! Analysis report - the structured result of reading a medical report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of file submitted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    #[default]
    Image,
}

impl FileType {
    /// Maps an accepted MIME type to the wire file type.
    ///
    /// `application/pdf` is a PDF; everything else is treated as an image.
    pub fn from_mime(mime: &str) -> Self {
        if mime.eq_ignore_ascii_case("application/pdf") {
            FileType::Pdf
        } else {
            FileType::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Image => "image",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a measured value compares to the healthy range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    Normal,
    Attention,
    Elevated,
}

impl ParameterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ParameterStatus::Normal => "Normal",
            ParameterStatus::Attention => "Attention",
            ParameterStatus::Elevated => "Elevated",
        }
    }
}

/// One measured parameter with a plain-language explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParameter {
    pub parameter: String,
    pub value: String,
    pub status: ParameterStatus,
    pub explanation: String,
}

/// Narrative feedback accompanying the parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFeedback {
    pub overall_assessment: String,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub when_to_see_doctors: Vec<String>,
}

/// Report type shown when the analyzer does not name one.
pub const DEFAULT_REPORT_TYPE: &str = "Medical Report";

/// Full analysis result as returned by `POST /api/analyze-report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub parameters: Vec<ReportParameter>,
    #[serde(default)]
    pub report_type: String,
    #[serde(default)]
    pub summary: String,
    pub feedback: ReportFeedback,
}

impl AnalysisReport {
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// The report type, or "Medical Report" when blank.
    pub fn display_report_type(&self) -> &str {
        if self.report_type.trim().is_empty() {
            DEFAULT_REPORT_TYPE
        } else {
            &self.report_type
        }
    }

    /// Count of parameters with the given status.
    pub fn count_with_status(&self, status: ParameterStatus) -> usize {
        self.parameters.iter().filter(|p| p.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(report_type: &str, parameters: Vec<ReportParameter>) -> AnalysisReport {
        AnalysisReport {
            parameters,
            report_type: report_type.to_string(),
            summary: String::new(),
            feedback: ReportFeedback {
                overall_assessment: "ok".to_string(),
                key_findings: vec![],
                recommendations: vec![],
                when_to_see_doctors: vec![],
            },
        }
    }

    fn param(status: ParameterStatus) -> ReportParameter {
        ReportParameter {
            parameter: "TSH".to_string(),
            value: "2.1 mIU/L".to_string(),
            status,
            explanation: "fine".to_string(),
        }
    }

    #[test]
    fn file_type_from_mime() {
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Pdf);
        assert_eq!(FileType::from_mime("image/png"), FileType::Image);
        assert_eq!(FileType::from_mime("image/jpeg"), FileType::Image);
    }

    #[test]
    fn file_type_wire_names() {
        assert_eq!(serde_json::to_string(&FileType::Pdf).unwrap(), "\"pdf\"");
        let parsed: FileType = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(parsed, FileType::Image);
    }

    #[test]
    fn report_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(report("Thyroid Function", vec![param(ParameterStatus::Normal)])).unwrap();
        assert_eq!(json["reportType"], "Thyroid Function");
        assert_eq!(json["parameters"][0]["status"], "normal");
        assert!(json["feedback"]["overallAssessment"].is_string());
        assert!(json["feedback"]["whenToSeeDoctors"].is_array());
        assert!(json["feedback"]["keyFindings"].is_array());
    }

    #[test]
    fn blank_report_type_displays_default() {
        assert_eq!(report("  ", vec![]).display_report_type(), DEFAULT_REPORT_TYPE);
        assert_eq!(report("Metabolic Panel", vec![]).display_report_type(), "Metabolic Panel");
    }

    #[test]
    fn counts_parameters_by_status() {
        let r = report(
            "x",
            vec![
                param(ParameterStatus::Normal),
                param(ParameterStatus::Elevated),
                param(ParameterStatus::Elevated),
            ],
        );
        assert!(r.has_parameters());
        assert_eq!(r.count_with_status(ParameterStatus::Elevated), 2);
        assert_eq!(r.count_with_status(ParameterStatus::Attention), 0);
    }
}

//! Three-tier risk classification produced by the scoring model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive, percent) of the low tier.
pub const LOW_THRESHOLD_PERCENT: u32 = 25;

/// Upper bound (inclusive, percent) of the medium tier.
pub const MEDIUM_THRESHOLD_PERCENT: u32 = 55;

/// Risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classify a total score against the maximum attainable score.
    /// - Low: percentage <= 25
    /// - Medium: 25 < percentage <= 55
    /// - High: percentage > 55
    ///
    /// Compared as `total * 100 <= threshold * max` so no rounding occurs.
    pub fn from_score(total: u32, max: u32) -> Self {
        let scaled = u64::from(total) * 100;
        let max = u64::from(max);
        if scaled <= u64::from(LOW_THRESHOLD_PERCENT) * max {
            Self::Low
        } else if scaled <= u64::from(MEDIUM_THRESHOLD_PERCENT) * max {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Headline shown on the result card.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Moderate Risk",
            Self::High => "Higher Risk",
        }
    }

    /// Preventive suggestions for this tier.
    pub fn preventive_suggestions(&self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Continue your healthy lifestyle habits",
                "Maintain regular exercise routine",
                "Keep a balanced diet rich in whole foods",
                "Schedule routine check-ups annually",
            ],
            Self::Medium => &[
                "Consider tracking your menstrual cycle",
                "Focus on anti-inflammatory foods",
                "Incorporate regular physical activity",
                "Manage stress through relaxation techniques",
                "Discuss screening with your healthcare provider",
            ],
            Self::High => &[
                "Schedule an appointment with a gynecologist or endocrinologist",
                "Request hormone panel and ultrasound tests",
                "Start a PCOS-friendly diet plan",
                "Begin a regular exercise routine",
                "Consider stress management and mental health support",
                "Join a PCOS support community",
            ],
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

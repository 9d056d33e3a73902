//! Screen enum naming every full-view state the router can display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The ten named screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Landing,
    Auth,
    Dashboard,
    MedicalAnalyzer,
    RiskAssessment,
    Diet,
    Exercise,
    MentalHealth,
    Education,
    Community,
}

impl Screen {
    /// Returns all screens in declaration order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Landing,
            Screen::Auth,
            Screen::Dashboard,
            Screen::MedicalAnalyzer,
            Screen::RiskAssessment,
            Screen::Diet,
            Screen::Exercise,
            Screen::MentalHealth,
            Screen::Education,
            Screen::Community,
        ]
    }

    /// Returns the wire identifier (`"medical-analyzer"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Auth => "auth",
            Screen::Dashboard => "dashboard",
            Screen::MedicalAnalyzer => "medical-analyzer",
            Screen::RiskAssessment => "risk-assessment",
            Screen::Diet => "diet",
            Screen::Exercise => "exercise",
            Screen::MentalHealth => "mental-health",
            Screen::Education => "education",
            Screen::Community => "community",
        }
    }

    /// Returns the display title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Welcome",
            Screen::Auth => "Sign In",
            Screen::Dashboard => "Home",
            Screen::MedicalAnalyzer => "Medical Report Analyzer",
            Screen::RiskAssessment => "PCOS Risk Assessment",
            Screen::Diet => "Diet Personalization",
            Screen::Exercise => "Exercise Guidance",
            Screen::MentalHealth => "Mental Health Support",
            Screen::Education => "Educational Hub",
            Screen::Community => "Community",
        }
    }

    /// Returns true for the screens that sit before authentication.
    pub fn is_pre_auth(&self) -> bool {
        matches!(self, Screen::Landing | Screen::Auth)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("screen", format!("unknown screen '{}'", s))
            })
    }
}

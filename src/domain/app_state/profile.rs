//! User profile held in the application store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::assessment::RiskTier;

/// Self-reported fitness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn all() -> &'static [FitnessLevel] {
        &[
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "New to exercise or returning after a break",
            FitnessLevel::Intermediate => "Exercise regularly, 2-3 times per week",
            FitnessLevel::Advanced => "Consistent exercise routine, 4+ times per week",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Profile of the current user.
///
/// Only `risk_score` is written by a flow (the risk assessment); the other
/// fields stay at their defaults unless a caller sets them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub symptoms: BTreeSet<String>,
    pub diet_preferences: BTreeSet<String>,
    pub fitness_level: FitnessLevel,
    pub risk_score: Option<RiskTier>,
}

impl UserProfile {
    /// Returns a copy with the risk score replaced.
    pub fn with_risk_score(mut self, tier: RiskTier) -> Self {
        self.risk_score = Some(tier);
        self
    }
}

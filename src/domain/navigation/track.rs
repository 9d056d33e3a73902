//! User track: the persona that conditions dashboard and content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-chosen persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserTrack {
    /// Already diagnosed, managing the condition.
    Diagnosed,
    /// Not diagnosed, focused on prevention.
    AtRisk,
}

impl UserTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserTrack::Diagnosed => "diagnosed",
            UserTrack::AtRisk => "at-risk",
        }
    }
}

impl fmt::Display for UserTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

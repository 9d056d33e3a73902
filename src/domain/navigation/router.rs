//! ScreenRouter - maps the current screen pointer to the view to render.
//!
//! The router is a pure function of `(screen, track)`. It owns no state; the
//! current screen lives in the application store and navigation overwrites it.
//!
//! # Variants
//!
//! - `Gated`: landing → auth → dashboard → feature screens. Default `landing`.
//! - `Ungated`: no landing or auth screens. Default `dashboard`.
//!
//! A screen the active variant does not contain resolves to the default
//! screen's view.

use serde::{Deserialize, Serialize};

use super::{Screen, UserTrack};

/// Router configuration chosen once per application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterVariant {
    #[default]
    Gated,
    Ungated,
}

/// The renderable view selected for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Landing,
    Auth,
    /// Feature grid shown when no track has been chosen.
    Dashboard,
    /// Dashboard for the diagnosed track.
    DashboardManagement,
    /// Dashboard for the at-risk track.
    DashboardPrevention,
    MedicalAnalyzer,
    RiskAssessment,
    DietPersonalization,
    ExerciseGuidance,
    MentalHealth,
    EducationalHub,
    Community,
}

/// Deterministic screen → view mapping for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRouter {
    variant: RouterVariant,
}

impl ScreenRouter {
    pub fn new(variant: RouterVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> RouterVariant {
        self.variant
    }

    /// Screen shown at application start.
    pub fn initial_screen(&self) -> Screen {
        self.default_screen()
    }

    /// Screen used when the requested one is not part of this variant.
    pub fn default_screen(&self) -> Screen {
        match self.variant {
            RouterVariant::Gated => Screen::Landing,
            RouterVariant::Ungated => Screen::Dashboard,
        }
    }

    /// Returns true if the variant contains the screen.
    pub fn supports(&self, screen: Screen) -> bool {
        match self.variant {
            RouterVariant::Gated => true,
            RouterVariant::Ungated => !screen.is_pre_auth(),
        }
    }

    /// Ordered set of screens this variant can show.
    pub fn screens(&self) -> Vec<Screen> {
        Screen::all()
            .iter()
            .copied()
            .filter(|s| self.supports(*s))
            .collect()
    }

    /// Selects the view for the screen pointer.
    ///
    /// The dashboard is the only screen whose view depends on the track.
    pub fn resolve(&self, screen: Screen, track: Option<UserTrack>) -> View {
        let screen = if self.supports(screen) {
            screen
        } else {
            self.default_screen()
        };

        match screen {
            Screen::Landing => View::Landing,
            Screen::Auth => View::Auth,
            Screen::Dashboard => match track {
                Some(UserTrack::Diagnosed) => View::DashboardManagement,
                Some(UserTrack::AtRisk) => View::DashboardPrevention,
                None => View::Dashboard,
            },
            Screen::MedicalAnalyzer => View::MedicalAnalyzer,
            Screen::RiskAssessment => View::RiskAssessment,
            Screen::Diet => View::DietPersonalization,
            Screen::Exercise => View::ExerciseGuidance,
            Screen::MentalHealth => View::MentalHealth,
            Screen::Education => View::EducationalHub,
            Screen::Community => View::Community,
        }
    }

    /// Selects the view for a raw identifier; unknown identifiers fall back.
    pub fn resolve_str(&self, screen: &str, track: Option<UserTrack>) -> View {
        match screen.parse::<Screen>() {
            Ok(screen) => self.resolve(screen, track),
            Err(_) => {
                tracing::debug!(screen, "unknown screen identifier, using default");
                self.resolve(self.default_screen(), track)
            }
        }
    }
}

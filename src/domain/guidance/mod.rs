//! Guidance module - the content screens.
//!
//! Diet and exercise are step wizards; mental health and education browse
//! static catalogs. Only a submitted mood check-in reaches the store.

mod diet;
mod education;
mod errors;
mod exercise;
mod mental_health;

pub use diet::{
    meal_plan_for, DietPreference, DietStep, DietWizard, Meal, DIET_PREFERENCES,
    NON_VEGETARIAN_PLAN, NUTRITION_GOALS, VEGETARIAN_PLAN,
};
pub use education::{
    EducationHub, EducationTab, FaqItem, MythFact, DOCTOR_VISIT_EXPECTATIONS, MYTHS_VS_FACTS,
    PCOS_VS_PCOD, WARNING_SIGNS,
};
pub use errors::GuidanceError;
pub use exercise::{
    workouts_for, ActivityIntensity, ExerciseStep, ExerciseWizard, PlannedDay, Workout,
    EXERCISE_SYMPTOMS, WEEKLY_PLAN,
};
pub use mental_health::{
    recent_moods, trend_label, MentalHealthVisit, SelfCareTip, AFFIRMATIONS, MOOD_HISTORY_LEN,
    SELF_CARE_TIPS, SUPPORT_NOTE,
};

use crate::domain::navigation::Screen;

/// Result of pressing back inside a wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome<S> {
    /// Moved to an earlier step.
    Step(S),
    /// Left the wizard; navigate to this screen.
    Exit(Screen),
}

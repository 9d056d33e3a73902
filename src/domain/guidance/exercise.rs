//! Exercise guidance: fitness level → symptoms → workouts.

use serde::{Deserialize, Serialize};

use super::{BackOutcome, GuidanceError};
use crate::domain::app_state::FitnessLevel;
use crate::domain::navigation::Screen;

pub const EXERCISE_SYMPTOMS: [&str; 6] = [
    "Fatigue",
    "Weight management",
    "Mood swings",
    "Stress/Anxiety",
    "Insulin resistance",
    "Inflammation",
];

/// A guided workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workout {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub calories: &'static str,
    pub level: FitnessLevel,
    pub benefits: &'static [&'static str],
    pub exercises: &'static [&'static str],
}

static BEGINNER_WORKOUTS: [Workout; 3] = [
    Workout {
        id: "gentle-yoga",
        name: "Gentle PCOS Yoga",
        duration: "20 min",
        calories: "80-100",
        level: FitnessLevel::Beginner,
        benefits: &["Hormone balance", "Stress relief", "Flexibility"],
        exercises: &["Cat-Cow Stretch", "Butterfly Pose", "Child's Pose", "Legs Up the Wall", "Gentle Twists"],
    },
    Workout {
        id: "walking",
        name: "Mindful Walking",
        duration: "30 min",
        calories: "120-150",
        level: FitnessLevel::Beginner,
        benefits: &["Insulin sensitivity", "Mood boost", "Low impact"],
        exercises: &["Warm-up stroll", "Brisk walking intervals", "Cool-down stretches"],
    },
    Workout {
        id: "stretching",
        name: "Morning Stretch Routine",
        duration: "15 min",
        calories: "50-70",
        level: FitnessLevel::Beginner,
        benefits: &["Energy boost", "Circulation", "Flexibility"],
        exercises: &["Neck rolls", "Shoulder stretches", "Hip openers", "Hamstring stretch", "Side bends"],
    },
];

static INTERMEDIATE_WORKOUTS: [Workout; 3] = [
    Workout {
        id: "strength",
        name: "PCOS Strength Training",
        duration: "30 min",
        calories: "180-220",
        level: FitnessLevel::Intermediate,
        benefits: &["Muscle building", "Metabolism boost", "Insulin sensitivity"],
        exercises: &["Squats", "Lunges", "Deadlifts", "Push-ups", "Planks", "Rows"],
    },
    Workout {
        id: "hiit-low",
        name: "Low-Impact HIIT",
        duration: "25 min",
        calories: "200-250",
        level: FitnessLevel::Intermediate,
        benefits: &["Fat burning", "Cardiovascular health", "Time efficient"],
        exercises: &["March in place", "Step touches", "Low squat pulses", "Modified burpees", "Plank variations"],
    },
    Workout {
        id: "dance",
        name: "Dance Cardio",
        duration: "30 min",
        calories: "180-220",
        level: FitnessLevel::Intermediate,
        benefits: &["Fun workout", "Endorphin release", "Full body"],
        exercises: &["Warm-up groove", "Choreography segments", "Freestyle", "Cool-down stretches"],
    },
];

static ADVANCED_WORKOUTS: [Workout; 1] = [Workout {
    id: "circuit",
    name: "Full Body Circuit",
    duration: "40 min",
    calories: "300-350",
    level: FitnessLevel::Advanced,
    benefits: &["Muscle endurance", "Metabolic boost", "Strength gains"],
    exercises: &["Burpees", "Jump squats", "Mountain climbers", "Kettlebell swings", "Box jumps", "Plank to push-up"],
}];

/// Workouts for a level; no level means the beginner set.
pub fn workouts_for(level: Option<FitnessLevel>) -> &'static [Workout] {
    match level {
        Some(FitnessLevel::Intermediate) => &INTERMEDIATE_WORKOUTS,
        Some(FitnessLevel::Advanced) => &ADVANCED_WORKOUTS,
        Some(FitnessLevel::Beginner) | None => &BEGINNER_WORKOUTS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIntensity {
    Rest,
    Active,
    Light,
}

/// One day of the weekly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedDay {
    pub day: &'static str,
    pub activity: &'static str,
    pub intensity: ActivityIntensity,
}

pub static WEEKLY_PLAN: [PlannedDay; 7] = [
    PlannedDay { day: "Mon", activity: "Yoga", intensity: ActivityIntensity::Light },
    PlannedDay { day: "Tue", activity: "Strength", intensity: ActivityIntensity::Active },
    PlannedDay { day: "Wed", activity: "Walking", intensity: ActivityIntensity::Light },
    PlannedDay { day: "Thu", activity: "Rest", intensity: ActivityIntensity::Rest },
    PlannedDay { day: "Fri", activity: "HIIT", intensity: ActivityIntensity::Active },
    PlannedDay { day: "Sat", activity: "Dance", intensity: ActivityIntensity::Active },
    PlannedDay { day: "Sun", activity: "Rest", intensity: ActivityIntensity::Rest },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseStep {
    Level,
    Symptoms,
    Workouts,
}

impl ExerciseStep {
    fn name(&self) -> &'static str {
        match self {
            ExerciseStep::Level => "level",
            ExerciseStep::Symptoms => "symptoms",
            ExerciseStep::Workouts => "workouts",
        }
    }
}

/// Exercise guidance wizard.
#[derive(Debug, Clone)]
pub struct ExerciseWizard {
    step: ExerciseStep,
    level: Option<FitnessLevel>,
    symptoms: Vec<&'static str>,
    expanded: Option<&'static str>,
}

impl ExerciseWizard {
    pub fn new() -> Self {
        Self {
            step: ExerciseStep::Level,
            level: None,
            symptoms: Vec::new(),
            expanded: None,
        }
    }

    pub fn step(&self) -> ExerciseStep {
        self.step
    }

    pub fn level(&self) -> Option<FitnessLevel> {
        self.level
    }

    pub fn symptoms(&self) -> &[&'static str] {
        &self.symptoms
    }

    /// Id of the workout whose exercise list is open.
    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    pub fn select_level(&mut self, level: FitnessLevel) -> Result<(), GuidanceError> {
        self.require(ExerciseStep::Level)?;
        self.level = Some(level);
        self.step = ExerciseStep::Symptoms;
        Ok(())
    }

    /// Toggles a symptom. Returns whether it is now selected.
    pub fn toggle_symptom(&mut self, symptom: &str) -> Result<bool, GuidanceError> {
        self.require(ExerciseStep::Symptoms)?;
        let symptom = EXERCISE_SYMPTOMS
            .iter()
            .copied()
            .find(|s| *s == symptom)
            .ok_or_else(|| GuidanceError::unknown("symptom", symptom))?;

        if let Some(pos) = self.symptoms.iter().position(|s| *s == symptom) {
            self.symptoms.remove(pos);
            Ok(false)
        } else {
            self.symptoms.push(symptom);
            Ok(true)
        }
    }

    /// Shows workouts. Symptoms are optional.
    pub fn show_workouts(&mut self) -> Result<&'static [Workout], GuidanceError> {
        self.require(ExerciseStep::Symptoms)?;
        self.step = ExerciseStep::Workouts;
        Ok(self.workouts())
    }

    pub fn workouts(&self) -> &'static [Workout] {
        workouts_for(self.level)
    }

    /// Opens a workout's exercise list, or closes it if already open.
    pub fn toggle_workout(&mut self, id: &str) -> Result<(), GuidanceError> {
        self.require(ExerciseStep::Workouts)?;
        let workout = self
            .workouts()
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| GuidanceError::unknown("workout", id))?;
        self.expanded = if self.expanded == Some(workout.id) {
            None
        } else {
            Some(workout.id)
        };
        Ok(())
    }

    pub fn weekly_plan(&self) -> &'static [PlannedDay] {
        &WEEKLY_PLAN
    }

    pub fn back(&mut self) -> BackOutcome<ExerciseStep> {
        match self.step {
            ExerciseStep::Level => BackOutcome::Exit(Screen::Dashboard),
            ExerciseStep::Symptoms => {
                self.step = ExerciseStep::Level;
                BackOutcome::Step(self.step)
            }
            ExerciseStep::Workouts => {
                self.expanded = None;
                self.step = ExerciseStep::Symptoms;
                BackOutcome::Step(self.step)
            }
        }
    }

    fn require(&self, expected: ExerciseStep) -> Result<(), GuidanceError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(GuidanceError::WrongStep {
                expected: expected.name(),
            })
        }
    }
}

impl Default for ExerciseWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workouts_per_level_with_beginner_fallback() {
        assert_eq!(workouts_for(None).len(), 3);
        assert_eq!(workouts_for(None)[0].id, "gentle-yoga");
        assert_eq!(workouts_for(Some(FitnessLevel::Intermediate))[0].id, "strength");
        assert_eq!(workouts_for(Some(FitnessLevel::Advanced)).len(), 1);
        for level in FitnessLevel::all() {
            assert!(workouts_for(Some(*level)).iter().all(|w| w.level == *level));
        }
    }

    #[test]
    fn weekly_plan_has_two_rest_days() {
        let rest = WEEKLY_PLAN
            .iter()
            .filter(|d| d.intensity == ActivityIntensity::Rest)
            .count();
        assert_eq!(WEEKLY_PLAN.len(), 7);
        assert_eq!(rest, 2);
    }

    #[test]
    fn full_walkthrough() {
        let mut wizard = ExerciseWizard::new();
        wizard.select_level(FitnessLevel::Advanced).unwrap();
        assert!(wizard.toggle_symptom("Fatigue").unwrap());

        let workouts = wizard.show_workouts().unwrap();
        assert_eq!(workouts[0].name, "Full Body Circuit");

        wizard.toggle_workout("circuit").unwrap();
        assert_eq!(wizard.expanded(), Some("circuit"));
        wizard.toggle_workout("circuit").unwrap();
        assert_eq!(wizard.expanded(), None);
    }

    #[test]
    fn workouts_need_no_symptoms() {
        let mut wizard = ExerciseWizard::new();
        wizard.select_level(FitnessLevel::Beginner).unwrap();
        assert!(wizard.show_workouts().is_ok());
        assert!(wizard.symptoms().is_empty());
    }

    #[test]
    fn actions_are_tied_to_their_step() {
        let mut wizard = ExerciseWizard::new();
        assert!(matches!(
            wizard.toggle_symptom("Fatigue"),
            Err(GuidanceError::WrongStep { expected: "symptoms" })
        ));
        assert!(wizard.show_workouts().is_err());
    }

    #[test]
    fn unknown_symptom_and_workout_are_rejected() {
        let mut wizard = ExerciseWizard::new();
        wizard.select_level(FitnessLevel::Beginner).unwrap();
        assert!(wizard.toggle_symptom("Headache").is_err());
        wizard.show_workouts().unwrap();
        assert!(wizard.toggle_workout("circuit").is_err());
    }

    #[test]
    fn back_walks_steps_then_exits_to_dashboard() {
        let mut wizard = ExerciseWizard::new();
        wizard.select_level(FitnessLevel::Intermediate).unwrap();
        wizard.show_workouts().unwrap();
        wizard.toggle_workout("dance").unwrap();

        assert_eq!(wizard.back(), BackOutcome::Step(ExerciseStep::Symptoms));
        assert!(wizard.expanded().is_none());
        assert_eq!(wizard.back(), BackOutcome::Step(ExerciseStep::Level));
        assert_eq!(wizard.back(), BackOutcome::Exit(Screen::Dashboard));
    }
}

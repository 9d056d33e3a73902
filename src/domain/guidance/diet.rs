//! Diet personalization: preference → goals → meal plan.

use super::{BackOutcome, GuidanceError};
use crate::domain::navigation::Screen;

/// A diet the user can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietPreference {
    pub id: &'static str,
    pub label: &'static str,
}

pub static DIET_PREFERENCES: [DietPreference; 6] = [
    DietPreference { id: "vegetarian", label: "Vegetarian" },
    DietPreference { id: "non-veg", label: "Non-Vegetarian" },
    DietPreference { id: "vegan", label: "Vegan" },
    DietPreference { id: "egg", label: "Eggetarian" },
    DietPreference { id: "gluten-free", label: "Gluten-Free" },
    DietPreference { id: "dairy-free", label: "Dairy-Free" },
];

pub const NUTRITION_GOALS: [&str; 5] = [
    "Manage insulin resistance",
    "Reduce inflammation",
    "Support hormone balance",
    "Weight management",
    "Improve energy levels",
];

/// One meal of a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub time: &'static str,
    pub meal: &'static str,
    pub description: &'static str,
    pub calories: u32,
    pub benefits: &'static [&'static str],
}

pub static VEGETARIAN_PLAN: [Meal; 4] = [
    Meal {
        time: "Breakfast (8 AM)",
        meal: "Overnight Oats with Berries",
        description: "Steel-cut oats with chia seeds, fresh berries, walnuts, and a drizzle of honey",
        calories: 350,
        benefits: &["High fiber", "Low GI", "Anti-inflammatory"],
    },
    Meal {
        time: "Lunch (1 PM)",
        meal: "Rainbow Buddha Bowl",
        description: "Quinoa, roasted chickpeas, avocado, roasted vegetables, and tahini dressing",
        calories: 450,
        benefits: &["Complete protein", "Healthy fats", "Hormone support"],
    },
    Meal {
        time: "Snack (4 PM)",
        meal: "Greek Yogurt Parfait",
        description: "Greek yogurt with pumpkin seeds, cinnamon, and sliced almonds",
        calories: 200,
        benefits: &["Probiotics", "Protein-rich", "Blood sugar stable"],
    },
    Meal {
        time: "Dinner (7 PM)",
        meal: "Lentil Vegetable Curry",
        description: "Red lentils with spinach, tomatoes, and anti-inflammatory spices served with brown rice",
        calories: 400,
        benefits: &["Plant protein", "Iron-rich", "Turmeric benefits"],
    },
];

pub static NON_VEGETARIAN_PLAN: [Meal; 4] = [
    Meal {
        time: "Breakfast (8 AM)",
        meal: "Spinach & Egg White Scramble",
        description: "Fluffy egg whites with spinach, tomatoes, and avocado on whole grain toast",
        calories: 320,
        benefits: &["High protein", "Folate-rich", "Healthy fats"],
    },
    Meal {
        time: "Lunch (1 PM)",
        meal: "Grilled Salmon Salad",
        description: "Wild-caught salmon over mixed greens with olive oil dressing and seeds",
        calories: 480,
        benefits: &["Omega-3 fatty acids", "Anti-inflammatory", "Vitamin D"],
    },
    Meal {
        time: "Snack (4 PM)",
        meal: "Turkey Roll-Ups",
        description: "Lean turkey slices with hummus, cucumber, and bell peppers",
        calories: 180,
        benefits: &["Lean protein", "Low carb", "Satisfying"],
    },
    Meal {
        time: "Dinner (7 PM)",
        meal: "Herb-Crusted Chicken",
        description: "Baked chicken breast with roasted vegetables and quinoa",
        calories: 420,
        benefits: &["Complete protein", "B vitamins", "Fiber-rich sides"],
    },
];

/// The plan served for a preference id.
///
/// Only "non-veg" gets the non-vegetarian plan; every other preference, and
/// no preference at all, gets the vegetarian one.
pub fn meal_plan_for(preference: Option<&str>) -> &'static [Meal] {
    match preference {
        Some("non-veg") => &NON_VEGETARIAN_PLAN,
        _ => &VEGETARIAN_PLAN,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietStep {
    Preferences,
    Goals,
    Plan,
}

impl DietStep {
    fn name(&self) -> &'static str {
        match self {
            DietStep::Preferences => "preferences",
            DietStep::Goals => "goals",
            DietStep::Plan => "plan",
        }
    }
}

/// Diet personalization wizard.
#[derive(Debug, Clone)]
pub struct DietWizard {
    step: DietStep,
    preference: Option<&'static DietPreference>,
    goals: Vec<&'static str>,
}

impl DietWizard {
    pub fn new() -> Self {
        Self {
            step: DietStep::Preferences,
            preference: None,
            goals: Vec::new(),
        }
    }

    pub fn step(&self) -> DietStep {
        self.step
    }

    pub fn preference(&self) -> Option<&'static DietPreference> {
        self.preference
    }

    /// Selected goals in the order they were picked.
    pub fn goals(&self) -> &[&'static str] {
        &self.goals
    }

    /// Picks a diet and moves on to goals.
    pub fn select_preference(&mut self, id: &str) -> Result<(), GuidanceError> {
        self.require(DietStep::Preferences)?;
        let preference = DIET_PREFERENCES
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| GuidanceError::unknown("diet preference", id))?;
        self.preference = Some(preference);
        self.step = DietStep::Goals;
        Ok(())
    }

    /// Toggles a goal. Returns whether it is now selected.
    pub fn toggle_goal(&mut self, goal: &str) -> Result<bool, GuidanceError> {
        self.require(DietStep::Goals)?;
        let goal = NUTRITION_GOALS
            .iter()
            .copied()
            .find(|g| *g == goal)
            .ok_or_else(|| GuidanceError::unknown("goal", goal))?;

        if let Some(pos) = self.goals.iter().position(|g| *g == goal) {
            self.goals.remove(pos);
            Ok(false)
        } else {
            self.goals.push(goal);
            Ok(true)
        }
    }

    /// Shows the plan. Needs at least one goal.
    pub fn generate_plan(&mut self) -> Result<&'static [Meal], GuidanceError> {
        self.require(DietStep::Goals)?;
        if self.goals.is_empty() {
            return Err(GuidanceError::NoGoalsSelected);
        }
        self.step = DietStep::Plan;
        Ok(self.meal_plan())
    }

    pub fn meal_plan(&self) -> &'static [Meal] {
        meal_plan_for(self.preference.map(|p| p.id))
    }

    pub fn total_calories(&self) -> u32 {
        self.meal_plan().iter().map(|m| m.calories).sum()
    }

    pub fn back(&mut self) -> BackOutcome<DietStep> {
        match self.step {
            DietStep::Preferences => BackOutcome::Exit(Screen::Dashboard),
            DietStep::Goals => {
                self.step = DietStep::Preferences;
                BackOutcome::Step(self.step)
            }
            DietStep::Plan => {
                self.step = DietStep::Goals;
                BackOutcome::Step(self.step)
            }
        }
    }

    fn require(&self, expected: DietStep) -> Result<(), GuidanceError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(GuidanceError::WrongStep {
                expected: expected.name(),
            })
        }
    }
}

impl Default for DietWizard {
    fn default() -> Self {
        Self::new()
    }
}

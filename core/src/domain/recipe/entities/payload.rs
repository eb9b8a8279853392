use serde::Serialize;

use super::{recipe::Recipe, weekly_plan::WeeklyPlan};

/// Success body of a generation: a single recipe (with its optional image) or a weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedPayload {
    Single(Recipe),
    Weekly(WeeklyPlan),
}

impl GeneratedPayload {
    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            GeneratedPayload::Single(recipe) => Some(recipe),
            GeneratedPayload::Weekly(_) => None,
        }
    }

    pub fn as_weekly_plan(&self) -> Option<&WeeklyPlan> {
        match self {
            GeneratedPayload::Single(_) => None,
            GeneratedPayload::Weekly(plan) => Some(plan),
        }
    }
}

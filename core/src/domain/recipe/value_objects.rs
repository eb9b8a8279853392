use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Preference value meaning "no constraint" for cuisine and meal type.
pub const ANY: &str = "Any";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Single,
    Weekly,
}

/// Daily macro targets. Zero means "no target" for that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroGoals {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

impl MacroGoals {
    pub fn is_empty(&self) -> bool {
        self.calories <= 0.0 && self.protein <= 0.0 && self.carbs <= 0.0 && self.fat <= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub meal_type: String,
    pub allergies: Vec<String>,
    pub plan_type: PlanType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_goals: Option<MacroGoals>,
}

impl GenerationRequest {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self {
            ingredients,
            cuisine: ANY.to_string(),
            meal_type: ANY.to_string(),
            allergies: Vec::new(),
            plan_type: PlanType::Single,
            macro_goals: None,
        }
    }

    /// Ingredients with surrounding whitespace removed and blank entries dropped.
    pub fn normalized_ingredients(&self) -> Vec<&str> {
        non_blank(&self.ingredients)
    }

    pub fn normalized_allergies(&self) -> Vec<&str> {
        non_blank(&self.allergies)
    }

    pub fn has_cuisine(&self) -> bool {
        is_constrained(&self.cuisine)
    }

    pub fn has_meal_type(&self) -> bool {
        is_constrained(&self.meal_type)
    }
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect()
}

fn is_constrained(preference: &str) -> bool {
    let preference = preference.trim();
    !preference.is_empty() && preference != ANY
}

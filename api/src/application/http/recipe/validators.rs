use pantry_chef_core::domain::recipe::value_objects::{
    ANY, GenerationRequest, MacroGoals, PlanType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "No ingredients provided"))]
    #[schema(example = json!(["chicken", "rice"]))]
    pub ingredients: Vec<String>,

    #[serde(default = "any")]
    #[schema(example = "Thai")]
    pub cuisine: String,

    #[serde(default = "any")]
    #[schema(example = "Dinner")]
    pub meal_type: String,

    #[serde(default)]
    #[schema(example = json!(["peanuts"]))]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub plan_type: PlanType,

    #[serde(default)]
    #[validate(nested)]
    pub macro_goals: Option<MacroGoalsValidator>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct MacroGoalsValidator {
    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories must not be negative"))]
    pub calories: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein must not be negative"))]
    pub protein: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "carbs must not be negative"))]
    pub carbs: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fat must not be negative"))]
    pub fat: f64,
}

fn any() -> String {
    ANY.to_string()
}

impl From<GenerateRecipeValidator> for GenerationRequest {
    fn from(payload: GenerateRecipeValidator) -> Self {
        GenerationRequest {
            ingredients: payload.ingredients,
            cuisine: payload.cuisine,
            meal_type: payload.meal_type,
            allergies: payload.allergies,
            plan_type: payload.plan_type,
            macro_goals: payload.macro_goals.map(|goals| MacroGoals {
                calories: goals.calories,
                protein: goals.protein,
                carbs: goals.carbs,
                fat: goals.fat,
            }),
        }
    }
}

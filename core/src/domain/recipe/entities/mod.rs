pub mod errors;
pub mod payload;
pub mod recipe;
pub mod weekly_plan;

pub use errors::GenerationError;
pub use payload::GeneratedPayload;
pub use recipe::{DietRecipe, Recipe};
pub use weekly_plan::{NutritionTotals, WeeklyPlan, Weekday};

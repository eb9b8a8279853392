//! Prompt construction for the text and image generation calls.
//!
//! Everything here is a pure function of the request, so the exact wording sent
//! to the provider can be asserted in tests.

use crate::domain::recipe::{
    entities::Weekday,
    value_objects::{GenerationRequest, MacroGoals, PlanType},
};

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful cooking assistant. Always respond with valid JSON only, no additional text.";

pub const SINGLE_RECIPE_KEYS: [&str; 6] = [
    "name",
    "ingredients",
    "instructions",
    "cookingTime",
    "servings",
    "difficulty",
];

pub const DIET_RECIPE_KEYS: [&str; 11] = [
    "name",
    "ingredients",
    "instructions",
    "cookingTime",
    "servings",
    "difficulty",
    "calories",
    "protein",
    "carbs",
    "fat",
    "nutritionTip",
];

const SINGLE_RECIPE_EXAMPLE: &str = r#"{
  "name": "Recipe Name",
  "ingredients": ["ingredient 1 with quantity", "ingredient 2 with quantity"],
  "instructions": ["step 1", "step 2"],
  "cookingTime": "30 minutes",
  "servings": "4",
  "difficulty": "Easy"
}"#;

const DIET_RECIPE_EXAMPLE: &str = r#"{
  "name": "Recipe Name",
  "ingredients": ["ingredient 1 with quantity", "ingredient 2 with quantity"],
  "instructions": ["step 1", "step 2"],
  "cookingTime": "30 minutes",
  "servings": "1",
  "difficulty": "Easy",
  "calories": "450 kcal",
  "protein": "35g",
  "carbs": "40g",
  "fat": "15g",
  "nutritionTip": "High in protein, great for muscle recovery"
}"#;

/// Builds the user turn of the text generation call.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let ingredients = request.normalized_ingredients().join(", ");

    let mut prompt = match request.plan_type {
        PlanType::Weekly => format!(
            "Create a healthy weekly meal plan covering 7 days (Monday to Sunday) for someone who wants to eat healthier and manage their weight. Use these available ingredients: {ingredients}. Focus on balanced nutrition and portion control, with a mix of proteins, healthy carbs and vegetables. Every meal should be calorie-conscious and nutritious."
        ),
        PlanType::Single => {
            format!("Create a recipe using these ingredients: {ingredients}.")
        }
    };

    if request.plan_type == PlanType::Weekly
        && let Some(clause) = request.macro_goals.as_ref().and_then(macro_goals_clause)
    {
        prompt.push_str(&clause);
    }

    if request.has_cuisine() {
        prompt.push_str(&format!(
            " The recipes should be {} cuisine.",
            request.cuisine.trim()
        ));
    }

    if request.has_meal_type() {
        prompt.push_str(&format!(
            " These should be {} recipes.",
            request.meal_type.trim().to_lowercase()
        ));
    }

    let allergies = request.normalized_allergies();
    if !allergies.is_empty() {
        prompt.push_str(&format!(
            " IMPORTANT: the user has the following allergies or dietary restrictions, and these must not be violated: {}. Do NOT include any ingredient that contains or is derived from these allergens, and avoid cross-contamination risks.",
            allergies.join(", ")
        ));
    }

    prompt.push_str(&schema_directive(request.plan_type));
    prompt
}

/// Prompt for the dish photo of a generated recipe.
pub fn image_prompt(recipe_name: &str) -> String {
    format!(
        "A beautiful, appetizing photo of {recipe_name}, professional food photography, top-down view, warm lighting, garnished beautifully, on a rustic table setting"
    )
}

fn macro_goals_clause(goals: &MacroGoals) -> Option<String> {
    if goals.is_empty() {
        return None;
    }

    let targets: Vec<String> = [
        (goals.calories, " kcal"),
        (goals.protein, "g protein"),
        (goals.carbs, "g carbs"),
        (goals.fat, "g fat"),
    ]
    .into_iter()
    .filter(|(amount, _)| *amount > 0.0)
    .map(|(amount, unit)| format!("{amount}{unit}"))
    .collect();

    Some(format!(
        " The user has the following daily macro goals: {}. Try to create meals that help meet these daily goals.",
        targets.join(", ")
    ))
}

fn schema_directive(plan_type: PlanType) -> String {
    match plan_type {
        PlanType::Weekly => {
            let days: Vec<String> = Weekday::ALL
                .iter()
                .map(|day| format!("\"{day}\""))
                .collect();
            format!(
                "\n\nReturn a JSON object whose top-level keys are exactly these 7 days: {}. Each day maps to an object with exactly these keys: {}. Do not add any other top-level keys.\nShape of one day:\n{}",
                days.join(", "),
                quoted(&DIET_RECIPE_KEYS),
                DIET_RECIPE_EXAMPLE
            )
        }
        PlanType::Single => format!(
            "\n\nReturn a JSON object with exactly these keys: {}. Do not add any other top-level keys.\nShape:\n{}",
            quoted(&SINGLE_RECIPE_KEYS),
            SINGLE_RECIPE_EXAMPLE
        ),
    }
}

fn quoted(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| format!("\"{key}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::recipe::entities::{DietRecipe, GenerationError, Recipe, WeeklyPlan, Weekday};

static LEADING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^```(?i:json)?[ \t]*\r?\n?").expect("leading fence pattern is valid")
});

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?```$").expect("trailing fence pattern is valid"));

/// Removes a markdown code fence wrapped around the provider text, if any.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let start = LEADING_FENCE
        .find(trimmed)
        .map(|fence| fence.end())
        .unwrap_or(0);
    let inner = &trimmed[start..];
    let end = TRAILING_FENCE
        .find(inner)
        .map(|fence| fence.start())
        .unwrap_or(inner.len());

    inner[..end].trim()
}

pub fn parse_json_object(raw: &str) -> Result<Map<String, Value>, GenerationError> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(GenerationError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(GenerationError::MalformedResponse(e.to_string())),
    }
}

pub fn parse_recipe(raw: &str) -> Result<Recipe, GenerationError> {
    let object = parse_json_object(raw)?;

    serde_json::from_value(Value::Object(object))
        .map_err(|e| GenerationError::MalformedResponse(format!("invalid recipe: {e}")))
}

/// Reads a day-keyed plan. Keys that are not weekday names are dropped; every
/// recognized day must be a valid recipe.
pub fn parse_weekly_plan(raw: &str) -> Result<WeeklyPlan, GenerationError> {
    let object = parse_json_object(raw)?;
    let mut plan = WeeklyPlan::new();

    for (key, value) in object {
        let Ok(day) = key.parse::<Weekday>() else {
            tracing::warn!(key = %key, "Ignoring unrecognized key in weekly plan");
            continue;
        };

        let mut recipe: DietRecipe = serde_json::from_value(value).map_err(|e| {
            GenerationError::MalformedResponse(format!("invalid recipe for {day}: {e}"))
        })?;
        // Weekly days never carry images, whatever the provider wrote.
        recipe.recipe.image_url = None;
        plan.insert(day, recipe);
    }

    if plan.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "weekly plan contains no recognized day".to_string(),
        ));
    }

    Ok(plan)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

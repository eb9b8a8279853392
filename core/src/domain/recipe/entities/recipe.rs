use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cooking_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub servings: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: Option<String>,
    /// Data URI or URL of the dish photo. `null` when no image was produced.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default, deserialize_with = "lenient_string")]
    pub calories: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub protein: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub carbs: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fat: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nutrition_tip: Option<String>,
}

/// Accepts a string, a number or null for the free-form descriptive fields.
/// Models regularly answer `"servings": 2` even when asked for a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_servings_become_strings() {
        let recipe: Recipe = serde_json::from_value(json!({
            "name": "Omelette",
            "ingredients": ["2 eggs"],
            "instructions": ["Whisk", "Fry"],
            "servings": 2
        }))
        .unwrap();

        assert_eq!(recipe.servings.as_deref(), Some("2"));
        assert_eq!(recipe.cooking_time, None);
        assert_eq!(recipe.image_url, None);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<Recipe>(json!({
            "ingredients": ["2 eggs"],
            "instructions": ["Fry"]
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_image_url_serializes_as_null() {
        let recipe = Recipe {
            name: "Toast".to_string(),
            ingredients: vec!["1 slice bread".to_string()],
            instructions: vec!["Toast it".to_string()],
            cooking_time: None,
            servings: None,
            difficulty: None,
            image_url: None,
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert!(value.get("imageUrl").unwrap().is_null());
    }

    #[test]
    fn test_diet_recipe_reads_flattened_fields() {
        let recipe: DietRecipe = serde_json::from_value(json!({
            "name": "Grilled Salmon",
            "ingredients": ["150g salmon"],
            "instructions": ["Grill"],
            "cookingTime": "15 minutes",
            "calories": "450 kcal",
            "protein": 35,
            "nutritionTip": "Rich in omega-3"
        }))
        .unwrap();

        assert_eq!(recipe.recipe.name, "Grilled Salmon");
        assert_eq!(recipe.recipe.cooking_time.as_deref(), Some("15 minutes"));
        assert_eq!(recipe.calories.as_deref(), Some("450 kcal"));
        assert_eq!(recipe.protein.as_deref(), Some("35"));
        assert_eq!(recipe.nutrition_tip.as_deref(), Some("Rich in omega-3"));
    }
}

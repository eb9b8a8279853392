use std::fmt::{self, Write};

use pantry_chef_core::domain::recipe::{DietRecipe, GeneratedPayload, Recipe, WeeklyPlan};

pub fn render(out: &mut impl Write, payload: &GeneratedPayload) -> fmt::Result {
    match payload {
        GeneratedPayload::Single(recipe) => render_recipe(out, recipe),
        GeneratedPayload::Weekly(plan) => render_weekly_plan(out, plan),
    }
}

pub fn render_recipe(out: &mut impl Write, recipe: &Recipe) -> fmt::Result {
    writeln!(out, "{}", recipe.name)?;

    let meta = meta_line(recipe);
    if !meta.is_empty() {
        writeln!(out, "{meta}")?;
    }

    writeln!(out)?;
    writeln!(out, "Ingredients")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "  - {ingredient}")?;
    }

    writeln!(out)?;
    writeln!(out, "Instructions")?;
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        writeln!(out, "  {}. {instruction}", step + 1)?;
    }

    if let Some(image_url) = &recipe.image_url {
        writeln!(out)?;
        writeln!(out, "Image: {}", describe_image(image_url))?;
    }

    Ok(())
}

pub fn render_weekly_plan(out: &mut impl Write, plan: &WeeklyPlan) -> fmt::Result {
    for (day, recipe) in plan.days() {
        writeln!(out, "== {day} ==")?;
        render_recipe(out, &recipe.recipe)?;

        let nutrition = nutrition_line(recipe);
        if !nutrition.is_empty() {
            writeln!(out)?;
            writeln!(out, "{nutrition}")?;
        }
        if let Some(tip) = &recipe.nutrition_tip {
            writeln!(out, "Tip: {tip}")?;
        }
        writeln!(out)?;
    }

    let missing = plan.missing_days();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|day| day.as_str()).collect();
        writeln!(out, "No meal planned for: {}", names.join(", "))?;
    }

    let totals = plan.weekly_totals();
    writeln!(
        out,
        "Weekly totals: {} kcal, {}g protein, {}g carbs, {}g fat",
        totals.calories, totals.protein, totals.carbs, totals.fat
    )
}

fn meta_line(recipe: &Recipe) -> String {
    [
        recipe.cooking_time.as_deref().map(|v| format!("Time: {v}")),
        recipe.servings.as_deref().map(|v| format!("Servings: {v}")),
        recipe.difficulty.as_deref().map(|v| format!("Difficulty: {v}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" | ")
}

fn nutrition_line(recipe: &DietRecipe) -> String {
    [
        ("Calories", &recipe.calories),
        ("Protein", &recipe.protein),
        ("Carbs", &recipe.carbs),
        ("Fat", &recipe.fat),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_deref().map(|v| format!("{label}: {v}")))
    .collect::<Vec<_>>()
    .join(" | ")
}

// Inline images are base64 data URIs, far too long for a terminal.
fn describe_image(image_url: &str) -> String {
    match image_url.strip_prefix("data:") {
        Some(rest) => {
            let media_type = rest.split(';').next().unwrap_or("image");
            format!("inline {media_type} ({} chars)", image_url.len())
        }
        None => image_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pantry_chef_core::domain::recipe::Weekday;

    use super::*;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: vec!["1 cup rice".to_string(), "200g chicken".to_string()],
            instructions: vec!["Cook rice".to_string(), "Cook chicken".to_string()],
            cooking_time: Some("20 minutes".to_string()),
            servings: Some("2".to_string()),
            difficulty: None,
            image_url: None,
        }
    }

    fn diet(name: &str, calories: &str) -> DietRecipe {
        DietRecipe {
            recipe: recipe(name),
            calories: Some(calories.to_string()),
            protein: Some("30g".to_string()),
            carbs: None,
            fat: None,
            nutrition_tip: Some("Drink water".to_string()),
        }
    }

    #[test]
    fn test_render_recipe() {
        let mut out = String::new();
        let recipe = recipe("Thai Chicken Rice")
            .with_image_url(Some("data:image/png;base64,iVBORw0KGgo=".to_string()));

        render_recipe(&mut out, &recipe).unwrap();

        assert!(out.starts_with("Thai Chicken Rice\nTime: 20 minutes | Servings: 2\n"));
        assert!(out.contains("  - 200g chicken\n"));
        assert!(out.contains("  1. Cook rice\n  2. Cook chicken\n"));
        assert!(out.contains("Image: inline image/png (34 chars)"));
    }

    #[test]
    fn test_render_recipe_without_image() {
        let mut out = String::new();

        render_recipe(&mut out, &recipe("Soup")).unwrap();

        assert!(!out.contains("Image:"));
    }

    #[test]
    fn test_render_weekly_plan_in_calendar_order() {
        let mut plan = WeeklyPlan::new();
        plan.insert(Weekday::Wednesday, diet("Salad", "300 kcal"));
        plan.insert(Weekday::Monday, diet("Soup", "450 kcal"));

        let mut out = String::new();
        render_weekly_plan(&mut out, &plan).unwrap();

        let monday = out.find("== Monday ==").unwrap();
        let wednesday = out.find("== Wednesday ==").unwrap();
        assert!(monday < wednesday);
        assert!(out.contains("Calories: 450 kcal | Protein: 30g\n"));
        assert!(out.contains("Tip: Drink water\n"));
        assert!(out.contains("No meal planned for: Tuesday, Thursday, Friday, Saturday, Sunday"));
        assert!(out.ends_with("Weekly totals: 750 kcal, 60g protein, 0g carbs, 0g fat\n"));
    }
}

use clap::Parser;
use pantry_chef_core::domain::recipe::{ANY, GenerationRequest, MacroGoals, PlanType};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-chef", version, about = "Turn what is in your pantry into a recipe")]
pub struct Args {
    /// Base URL of the Pantry Chef API, including any root path.
    #[arg(long, env = "PANTRY_CHEF_URL", default_value = "http://localhost:3333")]
    pub server_url: String,

    /// Bearer token sent with the request, if the deployment expects one.
    #[arg(long, env = "PANTRY_CHEF_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Ingredient on hand. Repeat the flag or separate with commas.
    #[arg(short, long = "ingredient", value_delimiter = ',')]
    pub ingredients: Vec<String>,

    #[arg(long, default_value = ANY)]
    pub cuisine: String,

    #[arg(long, default_value = ANY)]
    pub meal_type: String,

    /// Allergy or dietary restriction to avoid.
    #[arg(short, long = "allergy", value_delimiter = ',')]
    pub allergies: Vec<String>,

    /// Ask for a seven day diet plan instead of a single recipe.
    #[arg(long)]
    pub weekly: bool,

    #[arg(long, default_value_t = 0.0, requires = "weekly")]
    pub calories: f64,

    #[arg(long, default_value_t = 0.0, requires = "weekly")]
    pub protein: f64,

    #[arg(long, default_value_t = 0.0, requires = "weekly")]
    pub carbs: f64,

    #[arg(long, default_value_t = 0.0, requires = "weekly")]
    pub fat: f64,

    #[arg(long, env = "LOG_FILTER", default_value = "warn")]
    pub log_filter: String,
}

impl Args {
    pub fn request(&self) -> GenerationRequest {
        let plan_type = if self.weekly {
            PlanType::Weekly
        } else {
            PlanType::Single
        };

        // Macro goals only travel with weekly plans.
        let macro_goals = self.weekly.then_some(MacroGoals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        });

        GenerationRequest {
            ingredients: self.ingredients.clone(),
            cuisine: self.cuisine.clone(),
            meal_type: self.meal_type.clone(),
            allergies: self.allergies.clone(),
            plan_type,
            macro_goals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_has_no_macro_goals() {
        let args = Args::try_parse_from([
            "pantry-chef",
            "-i",
            "chicken,rice",
            "--cuisine",
            "Thai",
            "--allergy",
            "peanuts",
        ])
        .unwrap();

        let request = args.request();
        assert_eq!(request.ingredients, vec!["chicken", "rice"]);
        assert_eq!(request.cuisine, "Thai");
        assert_eq!(request.meal_type, "Any");
        assert_eq!(request.allergies, vec!["peanuts"]);
        assert_eq!(request.plan_type, PlanType::Single);
        assert_eq!(request.macro_goals, None);
    }

    #[test]
    fn test_weekly_request_carries_macro_goals() {
        let args = Args::try_parse_from([
            "pantry-chef",
            "--ingredient",
            "oats",
            "--ingredient",
            "eggs",
            "--weekly",
            "--calories",
            "2000",
        ])
        .unwrap();

        let request = args.request();
        assert_eq!(request.plan_type, PlanType::Weekly);
        assert_eq!(
            request.macro_goals,
            Some(MacroGoals {
                calories: 2000.0,
                ..MacroGoals::default()
            })
        );
    }

    #[test]
    fn test_macro_goals_require_weekly() {
        let result = Args::try_parse_from(["pantry-chef", "-i", "oats", "--calories", "2000"]);

        assert!(result.is_err());
    }
}

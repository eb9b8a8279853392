use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};
use utoipa::ToSchema;

use super::recipe::DietRecipe;

/// Day keys of a weekly plan. Ordering follows the calendar week, Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

/// Day-keyed meal plan. Days the provider left out are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    days: BTreeMap<Weekday, DietRecipe>,
}

/// Reads only weekday keys; anything else in the object (such as a top-level
/// `imageUrl`) is skipped.
impl<'de> Deserialize<'de> for WeeklyPlan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PlanVisitor;

        impl<'de> Visitor<'de> for PlanVisitor {
            type Value = WeeklyPlan;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by weekday names")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut plan = WeeklyPlan::new();
                while let Some(key) = map.next_key::<String>()? {
                    match key.parse::<Weekday>() {
                        Ok(day) => plan.insert(day, map.next_value()?),
                        Err(_) => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(plan)
            }
        }

        deserializer.deserialize_map(PlanVisitor)
    }
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday, recipe: DietRecipe) {
        self.days.insert(day, recipe);
    }

    pub fn get(&self, day: Weekday) -> Option<&DietRecipe> {
        self.days.get(&day)
    }

    /// Days in Monday to Sunday order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DietRecipe)> {
        self.days.iter().map(|(day, recipe)| (*day, recipe))
    }

    pub fn missing_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| !self.days.contains_key(day))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn weekly_totals(&self) -> NutritionTotals {
        self.days
            .values()
            .fold(NutritionTotals::default(), |mut totals, recipe| {
                totals.calories += leading_number(recipe.calories.as_deref());
                totals.protein += leading_number(recipe.protein.as_deref());
                totals.carbs += leading_number(recipe.carbs.as_deref());
                totals.fat += leading_number(recipe.fat.as_deref());
                totals
            })
    }
}

/// Summed nutrition across the days of a plan. Calories in kcal, the rest in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Reads the number a free-form value starts with: "450 kcal" -> 450, "35.5g" -> 35.5.
fn leading_number(value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };

    let number: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    number.parse().unwrap_or(0.0)
}

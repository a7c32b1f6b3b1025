//! Output schema for the daily recipe file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Schema version written into every record.
pub const SCHEMA_VERSION: &str = "1.0";

/// Default instructions text when the API omits them.
pub const DEFAULT_INSTRUCTIONS: &str = "See full recipe for instructions.";

/// Top-level record written to the output file. Rebuilt fresh on every run;
/// the output file is fully overwritten, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub version: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: NaiveDate,
    pub recipe: RecipeDetail,
}

/// Normalized recipe fields, serialized with the API's camelCase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub title: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub image: String,
    pub source_url: String,
    pub instructions: String,
    pub summary: String,
    pub cuisines: Vec<String>,
    pub dish_types: Vec<String>,
    /// The `original` text of each source ingredient, in source order.
    pub ingredients: Vec<String>,
}

impl RecipeRecord {
    pub fn new(last_updated: NaiveDate, recipe: RecipeDetail) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            last_updated,
            recipe,
        }
    }

    /// The static record written when the fetch pipeline fails and no
    /// previous output exists.
    pub fn fallback(last_updated: NaiveDate) -> Self {
        Self::new(
            last_updated,
            RecipeDetail {
                title: "Classic Pasta Carbonara".to_string(),
                ready_in_minutes: 25,
                servings: 4,
                image: "https://spoonacular.com/recipeImages/716429-556x370.jpg".to_string(),
                source_url:
                    "https://www.bbcgoodfood.com/recipes/ultimate-spaghetti-carbonara-recipe"
                        .to_string(),
                instructions: "Boil pasta until al dente. Meanwhile, fry pancetta until crisp. \
                               Beat eggs with cheese and pepper. Drain pasta, quickly toss with \
                               egg mixture and pancetta. Serve immediately."
                    .to_string(),
                summary: "A traditional Italian pasta dish made with egg, hard cheese, pancetta \
                          and black pepper."
                    .to_string(),
                cuisines: vec!["Italian".to_string()],
                dish_types: vec!["main course".to_string(), "dinner".to_string()],
                ingredients: vec![
                    "350g spaghetti".to_string(),
                    "150g pancetta or bacon, diced".to_string(),
                    "4 large eggs".to_string(),
                    "50g Pecorino Romano, grated".to_string(),
                    "50g Parmesan, grated".to_string(),
                    "Freshly ground black pepper".to_string(),
                    "1 garlic clove, minced (optional)".to_string(),
                    "Salt, to taste".to_string(),
                ],
            },
        )
    }
}

//! Maps a raw API recipe object into the output schema.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::TransformError;
use crate::types::{RecipeDetail, RecipeRecord, DEFAULT_INSTRUCTIONS};

/// Build a `RecipeRecord` from the first recipe of an API response.
///
/// `title`, `readyInMinutes`, `servings`, `image`, `sourceUrl` and
/// `extendedIngredients` are required; `instructions`, `summary`, `cuisines`
/// and `dishTypes` fall back to defaults when absent.
pub fn transform_recipe(
    recipe: &Value,
    last_updated: NaiveDate,
) -> Result<RecipeRecord, TransformError> {
    let title = required_str(recipe, "title")?.to_string();
    let ready_in_minutes = required_u32(recipe, "readyInMinutes")?;
    let servings = required_u32(recipe, "servings")?;
    let image = required_str(recipe, "image")?.to_string();
    let source_url = required_str(recipe, "sourceUrl")?.to_string();

    let instructions = recipe
        .get("instructions")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_INSTRUCTIONS)
        .to_string();

    let summary = recipe
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let cuisines = string_list(recipe, "cuisines");
    let dish_types = string_list(recipe, "dishTypes");
    let ingredients = extract_ingredients(recipe)?;

    Ok(RecipeRecord::new(
        last_updated,
        RecipeDetail {
            title,
            ready_in_minutes,
            servings,
            image,
            source_url,
            instructions,
            summary,
            cuisines,
            dish_types,
            ingredients,
        },
    ))
}

fn required_str<'a>(recipe: &'a Value, field: &str) -> Result<&'a str, TransformError> {
    recipe
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| TransformError::MissingField(field.to_string()))
}

fn required_u32(recipe: &Value, field: &str) -> Result<u32, TransformError> {
    recipe
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| TransformError::MissingField(field.to_string()))
}

/// Optional list of strings; absent or non-array yields empty.
fn string_list(recipe: &Value, field: &str) -> Vec<String> {
    recipe
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The `original` text of each `extendedIngredients` entry, in source order.
/// A missing list, or an entry without `original`, fails the transform and
/// routes the run to the fallback path.
fn extract_ingredients(recipe: &Value) -> Result<Vec<String>, TransformError> {
    let entries = recipe
        .get("extendedIngredients")
        .and_then(Value::as_array)
        .ok_or_else(|| TransformError::MissingField("extendedIngredients".to_string()))?;

    entries
        .iter()
        .map(|entry| {
            entry
                .get("original")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    TransformError::MissingField("extendedIngredients.original".to_string())
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn full_recipe() -> Value {
        json!({
            "title": "Garlic Butter Salmon",
            "readyInMinutes": 30,
            "servings": 2,
            "image": "https://img.example/salmon.jpg",
            "sourceUrl": "https://example.com/salmon",
            "instructions": "Pan-sear the salmon.",
            "summary": "Quick weeknight salmon.",
            "cuisines": ["American"],
            "dishTypes": ["dinner"],
            "extendedIngredients": [
                {"original": "2 salmon fillets", "id": 10},
                {"original": "2 tbsp butter", "id": 11}
            ]
        })
    }

    #[test]
    fn maps_all_fields_through() {
        let record = transform_recipe(&full_recipe(), date()).unwrap();

        assert_eq!(record.version, crate::types::SCHEMA_VERSION);
        assert_eq!(record.last_updated, date());
        assert_eq!(record.recipe.title, "Garlic Butter Salmon");
        assert_eq!(record.recipe.ready_in_minutes, 30);
        assert_eq!(record.recipe.servings, 2);
        assert_eq!(record.recipe.instructions, "Pan-sear the salmon.");
        assert_eq!(record.recipe.cuisines, vec!["American"]);
        assert_eq!(record.recipe.dish_types, vec!["dinner"]);
    }

    #[test]
    fn ingredients_keep_source_order() {
        let recipe = json!({
            "title": "Pancakes",
            "readyInMinutes": 15,
            "servings": 4,
            "image": "https://img.example/p.jpg",
            "sourceUrl": "https://example.com/p",
            "extendedIngredients": [
                {"original": "2 eggs"},
                {"original": "1 cup flour"}
            ]
        });

        let record = transform_recipe(&recipe, date()).unwrap();
        assert_eq!(record.recipe.ingredients, vec!["2 eggs", "1 cup flour"]);
    }

    #[test]
    fn optional_fields_get_defaults() {
        let mut recipe = full_recipe();
        let obj = recipe.as_object_mut().unwrap();
        obj.remove("instructions");
        obj.remove("summary");
        obj.remove("cuisines");
        obj.remove("dishTypes");

        let record = transform_recipe(&recipe, date()).unwrap();
        assert_eq!(record.recipe.instructions, DEFAULT_INSTRUCTIONS);
        assert_eq!(record.recipe.summary, "");
        assert!(record.recipe.cuisines.is_empty());
        assert!(record.recipe.dish_types.is_empty());
    }

    #[test]
    fn empty_instructions_also_get_the_default() {
        let mut recipe = full_recipe();
        recipe["instructions"] = json!("");

        let record = transform_recipe(&recipe, date()).unwrap();
        assert_eq!(record.recipe.instructions, DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn missing_title_is_an_error() {
        let mut recipe = full_recipe();
        recipe.as_object_mut().unwrap().remove("title");

        assert!(matches!(
            transform_recipe(&recipe, date()),
            Err(TransformError::MissingField(f)) if f == "title"
        ));
    }

    #[test]
    fn missing_ingredient_list_is_an_error() {
        let mut recipe = full_recipe();
        recipe.as_object_mut().unwrap().remove("extendedIngredients");

        assert!(matches!(
            transform_recipe(&recipe, date()),
            Err(TransformError::MissingField(f)) if f == "extendedIngredients"
        ));
    }

    #[test]
    fn ingredient_entry_without_original_is_an_error() {
        let mut recipe = full_recipe();
        recipe["extendedIngredients"] = json!([{"id": 1}]);

        assert!(transform_recipe(&recipe, date()).is_err());
    }
}

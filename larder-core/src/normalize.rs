//! Mapping from raw catalog records to the canonical [`Recipe`].
//!
//! The catalog is loose about which fields it returns and what type they
//! have, so every accessor here tolerates absent or mistyped values and falls
//! back to the field's default instead of failing.

use serde_json::Value;

use crate::types::Recipe;

/// Title used when the catalog record has none.
pub const UNTITLED_RECIPE: &str = "Untitled recipe";

/// Normalize one raw catalog record. Never fails.
pub fn normalize_recipe(record: &Value) -> Recipe {
    let title = string_field(record, "title");
    let title = if title.trim().is_empty() {
        UNTITLED_RECIPE.to_string()
    } else {
        title
    };

    Recipe {
        id: record.get("id").and_then(as_catalog_id).unwrap_or(0),
        title,
        image: string_field(record, "image"),
        ready_in_minutes: count_field(record, "readyInMinutes"),
        servings: count_field(record, "servings"),
        summary: string_field(record, "summary"),
        instructions: string_field(record, "instructions"),
        diets: extract_diets(record),
        ingredients: extract_ingredients(record),
    }
}

/// Normalize a list of raw records, keeping catalog order.
pub fn normalize_search_results(records: &[Value]) -> Vec<Recipe> {
    records.iter().map(normalize_recipe).collect()
}

fn string_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Non-negative integer field. Floats are rounded; negatives and
/// non-numbers become 0.
fn count_field(record: &Value, key: &str) -> u32 {
    let Some(value) = record.get(key) else {
        return 0;
    };

    if let Some(n) = value.as_u64() {
        return u32::try_from(n).unwrap_or(u32::MAX);
    }

    match value.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.round().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn as_catalog_id(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_str()
            .and_then(|s| s.trim().parse::<i64>().ok())
    })
}

fn extract_diets(record: &Value) -> Vec<String> {
    record
        .get("diets")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Ingredient lines from `extendedIngredients[].original`, falling back to
/// the entry's `name`. Entries with neither are skipped.
fn extract_ingredients(record: &Value) -> Vec<String> {
    let Some(entries) = record.get("extendedIngredients").and_then(|v| v.as_array()) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            ["original", "name"].iter().find_map(|key| {
                entry
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let record = json!({
            "id": 715538,
            "title": "Bruschetta Style Pork & Pasta",
            "image": "https://img.spoonacular.com/recipes/715538-312x231.jpg",
            "readyInMinutes": 35,
            "servings": 5,
            "summary": "<b>Bruschetta</b> style pork",
            "instructions": "<ol><li>Boil pasta</li></ol>",
            "diets": ["dairy free", "Italian"],
            "extendedIngredients": [
                {"name": "pasta", "original": "1 lb penne pasta"},
                {"name": "pork", "original": "4 pork chops"}
            ]
        });

        let recipe = normalize_recipe(&record);
        assert_eq!(recipe.id, 715538);
        assert_eq!(recipe.title, "Bruschetta Style Pork & Pasta");
        assert_eq!(recipe.ready_in_minutes, 35);
        assert_eq!(recipe.servings, 5);
        assert_eq!(recipe.summary, "<b>Bruschetta</b> style pork");
        assert_eq!(recipe.diets, vec!["dairy free", "Italian"]);
        assert_eq!(recipe.ingredients, vec!["1 lb penne pasta", "4 pork chops"]);
    }

    #[test]
    fn test_missing_optional_fields_get_defaults() {
        let recipe = normalize_recipe(&json!({"id": 1, "title": "Plain"}));
        assert_eq!(recipe.image, "");
        assert_eq!(recipe.ready_in_minutes, 0);
        assert_eq!(recipe.servings, 0);
        assert_eq!(recipe.summary, "");
        assert_eq!(recipe.instructions, "");
        assert!(recipe.diets.is_empty());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_null_fields_get_defaults() {
        let recipe = normalize_recipe(&json!({
            "id": 2,
            "title": "Nulls",
            "image": null,
            "summary": null,
            "diets": null,
            "extendedIngredients": null
        }));
        assert_eq!(recipe.image, "");
        assert_eq!(recipe.summary, "");
        assert!(recipe.diets.is_empty());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_wrong_shapes_do_not_fail() {
        let shapes = [
            json!(null),
            json!("just a string"),
            json!([1, 2, 3]),
            json!({"id": "abc", "title": 12, "diets": "vegan", "extendedIngredients": {}}),
            json!({"servings": -3, "readyInMinutes": "soon"}),
        ];

        for shape in &shapes {
            let recipe = normalize_recipe(shape);
            assert_eq!(recipe.title, UNTITLED_RECIPE);
            assert_eq!(recipe.servings, 0);
            assert_eq!(recipe.ready_in_minutes, 0);
            assert!(recipe.diets.is_empty());
            assert!(recipe.ingredients.is_empty());
        }
    }

    #[test]
    fn test_numeric_coercion() {
        let recipe = normalize_recipe(&json!({
            "id": "640",
            "title": "Stringly typed",
            "readyInMinutes": 44.6,
            "servings": 2.0
        }));
        assert_eq!(recipe.id, 640);
        assert_eq!(recipe.ready_in_minutes, 45);
        assert_eq!(recipe.servings, 2);
    }

    #[test]
    fn test_blank_title_replaced() {
        let recipe = normalize_recipe(&json!({"id": 3, "title": "   "}));
        assert_eq!(recipe.title, UNTITLED_RECIPE);
    }

    #[test]
    fn test_ingredient_falls_back_to_name() {
        let recipe = normalize_recipe(&json!({
            "id": 4,
            "title": "Salad",
            "extendedIngredients": [
                {"original": "2 tomatoes"},
                {"name": "cucumber"},
                {"amount": 1.0},
                {"original": "", "name": "feta"},
                "not an object"
            ]
        }));
        assert_eq!(recipe.ingredients, vec!["2 tomatoes", "cucumber", "feta"]);
    }

    #[test]
    fn test_diets_keep_order_and_duplicates() {
        let recipe = normalize_recipe(&json!({
            "id": 5,
            "title": "Bowl",
            "diets": ["vegan", "gluten free", "vegan", 7]
        }));
        assert_eq!(recipe.diets, vec!["vegan", "gluten free", "vegan"]);
    }

    #[test]
    fn test_search_results_preserve_order() {
        let records = vec![
            json!({"id": 3, "title": "C"}),
            json!({"id": 1, "title": "A"}),
            json!({"id": 2, "title": "B"}),
        ];
        let ids: Vec<i64> = normalize_search_results(&records)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

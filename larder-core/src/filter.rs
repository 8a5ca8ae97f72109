//! Client-side re-filtering of catalog results.
//!
//! The catalog's own matching is fuzzier than what the search form promises,
//! so results are checked again here. A recipe passes only when every
//! predicate holds; the input order is preserved.

use crate::types::{Recipe, SearchFilters};

/// Sentinel value the filter pickers use for "no preference".
pub const ANY: &str = "any";

/// Keep the recipes matching all of `filters`, in their original order.
pub fn apply_filters(recipes: Vec<Recipe>, filters: &SearchFilters) -> Vec<Recipe> {
    let criteria = Criteria::new(filters);
    recipes
        .into_iter()
        .filter(|recipe| criteria.matches(recipe))
        .collect()
}

/// Whether a single recipe satisfies `filters`.
pub fn matches_filters(recipe: &Recipe, filters: &SearchFilters) -> bool {
    Criteria::new(filters).matches(recipe)
}

/// Filters lowercased once up front.
struct Criteria {
    query: Option<String>,
    cuisine: Option<String>,
    diet: Option<String>,
    ingredients: Vec<String>,
}

impl Criteria {
    fn new(filters: &SearchFilters) -> Self {
        Self {
            query: non_empty(&filters.query).map(|q| q.to_lowercase()),
            cuisine: label_filter(&filters.cuisine),
            diet: label_filter(&filters.diet),
            ingredients: ingredient_tokens(&filters.include_ingredients),
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_query(recipe)
            && matches_label(self.cuisine.as_deref(), &recipe.diets)
            && matches_label(self.diet.as_deref(), &recipe.diets)
            && self.matches_ingredients(recipe)
    }

    fn matches_query(&self, recipe: &Recipe) -> bool {
        match &self.query {
            None => true,
            Some(query) => recipe.title.to_lowercase().contains(query.as_str()),
        }
    }

    /// Every requested ingredient must appear, as a substring, in at least
    /// one of the recipe's ingredient lines.
    fn matches_ingredients(&self, recipe: &Recipe) -> bool {
        if self.ingredients.is_empty() {
            return true;
        }

        let lines: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|line| line.to_lowercase())
            .collect();

        self.ingredients
            .iter()
            .all(|token| lines.iter().any(|line| line.contains(token.as_str())))
    }
}

/// Exact, case-insensitive match against the recipe's diet labels.
fn matches_label(wanted: Option<&str>, labels: &[String]) -> bool {
    match wanted {
        None => true,
        Some(wanted) => labels.iter().any(|label| label.to_lowercase() == wanted),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn label_filter(value: &str) -> Option<String> {
    non_empty(value)
        .filter(|v| *v != ANY)
        .map(|v| v.to_lowercase())
}

/// Split "spaghetti, bacon" into lowercase tokens. An empty string yields no
/// tokens at all.
fn ingredient_tokens(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .collect()
}

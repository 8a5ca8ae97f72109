use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Canonical, UI-facing recipe.
///
/// Every field is populated: absent upstream values are replaced by `""`, `0`
/// or an empty list when the record is normalized. `summary` and
/// `instructions` carry upstream markup untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Catalog identifier, used as the bookmark idempotency key
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Image URL, empty when the catalog has none
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub instructions: String,
    /// Diet labels in catalog order
    #[serde(default)]
    pub diets: Vec<String>,
    /// Free-text ingredient lines, e.g. "200g spaghetti"
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// User-supplied search criteria. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchFilters {
    /// Free text matched against recipe titles
    pub query: String,
    /// Cuisine label, or "any"
    pub cuisine: String,
    /// Diet label, or "any"
    pub diet: String,
    /// Comma-separated ingredients that must all appear
    pub include_ingredients: String,
}

impl SearchFilters {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Whether any field is non-empty. Whitespace counts, matching how the
    /// filter evaluator treats `query`.
    pub fn has_criteria(&self) -> bool {
        [
            &self.query,
            &self.cuisine,
            &self.diet,
            &self.include_ingredients,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }
}

/// A user's saved copy of a catalog recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub catalog_id: i64,
    pub user_id: String,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub summary: String,
    pub instructions: String,
    pub diets: Vec<String>,
    pub ingredients: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Build a fresh, not yet persisted bookmark for `recipe`.
    pub fn new(recipe: &Recipe, user_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog_id: recipe.id,
            user_id: user_id.to_string(),
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            summary: recipe.summary.clone(),
            instructions: recipe.instructions.clone(),
            diets: recipe.diets.clone(),
            ingredients: recipe.ingredients.clone(),
            created_at: Utc::now(),
        }
    }

    /// The recipe as it was when bookmarked.
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.catalog_id,
            title: self.title.clone(),
            image: self.image.clone(),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            summary: self.summary.clone(),
            instructions: self.instructions.clone(),
            diets: self.diets.clone(),
            ingredients: self.ingredients.clone(),
        }
    }
}

//! Choices offered by the cuisine and diet pickers.

use serde::Serialize;
use utoipa::ToSchema;

const CUISINES: &[&str] = &[
    "African",
    "American",
    "British",
    "Cajun",
    "Caribbean",
    "Chinese",
    "Eastern European",
    "European",
    "French",
    "German",
    "Greek",
    "Indian",
    "Irish",
    "Italian",
    "Japanese",
    "Jewish",
    "Korean",
    "Latin American",
    "Mediterranean",
    "Mexican",
    "Middle Eastern",
    "Nordic",
    "Southern",
    "Spanish",
    "Thai",
    "Vietnamese",
];

const DIETS: &[&str] = &[
    "Gluten Free",
    "Ketogenic",
    "Vegetarian",
    "Lacto-Vegetarian",
    "Ovo-Vegetarian",
    "Vegan",
    "Pescetarian",
    "Paleo",
    "Primal",
    "Low FODMAP",
    "Whole30",
];

/// A picker entry. `value` is what gets sent back as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: String,
}

pub fn cuisine_options() -> Vec<FilterOption> {
    CUISINES
        .iter()
        .map(|&label| FilterOption {
            label,
            value: label.to_lowercase(),
        })
        .collect()
}

/// Diet values replace the first hyphen with a space, matching how the
/// catalog spells its diet labels ("lacto vegetarian").
pub fn diet_options() -> Vec<FilterOption> {
    DIETS
        .iter()
        .map(|&label| FilterOption {
            label,
            value: label.to_lowercase().replacen('-', " ", 1),
        })
        .collect()
}

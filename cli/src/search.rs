use anyhow::{Context, Result};
use larder_core::{
    cuisine_options, diet_options, search_recipes, CatalogConfig, Recipe, SearchFilters,
    SpoonacularClientBuilder,
};

pub async fn search(filters: &SearchFilters, json: bool) -> Result<()> {
    if !filters.has_criteria() {
        anyhow::bail!("Please enter a search term or select filters");
    }

    let config = CatalogConfig::from_env().context("Invalid catalog configuration")?;
    let client = SpoonacularClientBuilder::from_config(&config)
        .user_agent(concat!("larder-cli/", env!("CARGO_PKG_VERSION")).to_string())
        .build()
        .context("Failed to build catalog client")?;
    if !client.is_configured() {
        anyhow::bail!("{} is not set", larder_core::catalog::API_KEY_ENV);
    }

    let results = search_recipes(&client, filters).await;

    if results.degraded {
        eprintln!("Warning: the recipe catalog could not be reached");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.recipes.is_empty() {
        println!("No recipes found");
        return Ok(());
    }

    for recipe in &results.recipes {
        println!("{}", summary_line(recipe));
    }

    Ok(())
}

pub fn summary_line(recipe: &Recipe) -> String {
    let mut line = format!("{:>8}  {}", recipe.id, recipe.title);
    if recipe.ready_in_minutes > 0 {
        line.push_str(&format!(" ({} min)", recipe.ready_in_minutes));
    }
    if !recipe.diets.is_empty() {
        line.push_str(&format!(" [{}]", recipe.diets.join(", ")));
    }
    line
}

pub fn print_filters() {
    println!("Cuisines:");
    for option in cuisine_options() {
        println!("  {:<20} {}", option.label, option.value);
    }
    println!("Diets:");
    for option in diet_options() {
        println!("  {:<20} {}", option.label, option.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::normalize_recipe;
    use serde_json::json;

    #[test]
    fn test_summary_line() {
        let recipe = normalize_recipe(&json!({
            "id": 12,
            "title": "Falafel",
            "readyInMinutes": 40,
            "diets": ["vegan", "dairy free"]
        }));
        assert_eq!(
            summary_line(&recipe),
            "      12  Falafel (40 min) [vegan, dairy free]"
        );

        let bare = normalize_recipe(&json!({"id": 3, "title": "Toast"}));
        assert_eq!(summary_line(&bare), "       3  Toast");
    }

    #[tokio::test]
    async fn test_search_without_criteria_fails() {
        let err = search(&SearchFilters::default(), false).await.unwrap_err();
        assert!(err.to_string().contains("search term"));
    }
}

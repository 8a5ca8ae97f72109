mod bookmarks;
mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Larder CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the recipe catalog directly (needs SPOONACULAR_API_KEY)
    Search {
        /// Free text matched against recipe titles
        #[arg(long, default_value = "")]
        query: String,
        /// Cuisine label, e.g. "Italian"
        #[arg(long, default_value = "")]
        cuisine: String,
        /// Diet label, e.g. "vegan"
        #[arg(long, default_value = "")]
        diet: String,
        /// Comma-separated ingredients that must all appear
        #[arg(long, default_value = "")]
        include_ingredients: String,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the cuisine and diet filter choices
    Filters,
    /// Bookmark a catalog recipe by id
    Save {
        #[arg(long)]
        recipe_id: i64,
        #[command(flatten)]
        target: bookmarks::Target,
    },
    /// List bookmarked recipes, newest first
    Saved {
        #[command(flatten)]
        target: bookmarks::Target,
    },
    /// Remove a bookmark
    Unsave {
        #[arg(long)]
        recipe_id: i64,
        #[command(flatten)]
        target: bookmarks::Target,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            cuisine,
            diet,
            include_ingredients,
            json,
        } => {
            let filters = larder_core::SearchFilters {
                query,
                cuisine,
                diet,
                include_ingredients,
            };
            search::search(&filters, json).await?;
        }
        Commands::Filters => search::print_filters(),
        Commands::Save { recipe_id, target } => {
            bookmarks::save(&target, recipe_id).await?;
        }
        Commands::Saved { target } => {
            bookmarks::list(&target).await?;
        }
        Commands::Unsave { recipe_id, target } => {
            bookmarks::unsave(&target, recipe_id).await?;
        }
    }

    Ok(())
}

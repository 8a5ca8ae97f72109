pub mod bookmarks;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod search;
pub mod types;

pub use bookmarks::{BookmarkStore, MemoryBookmarkStore, SaveOutcome};
pub use catalog::{
    CatalogClient, CatalogConfig, MockCatalog, MockFailure, RawRecord, SpoonacularClient,
    SpoonacularClientBuilder, PAGE_SIZE,
};
pub use error::{CatalogError, ConfigError, StoreError};
pub use filter::{apply_filters, matches_filters};
pub use normalize::{normalize_recipe, normalize_search_results};
pub use options::{cuisine_options, diet_options, FilterOption};
pub use search::{search_recipes, SearchResults};
pub use types::{Bookmark, Recipe, SearchFilters};

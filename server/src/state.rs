use larder_core::{BookmarkStore, CatalogClient};
use std::sync::Arc;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

pub struct AppContext {
    pub catalog: Arc<dyn CatalogClient>,
    pub bookmarks: Arc<dyn BookmarkStore>,
    /// Identity used when a request does not name its user
    pub default_user_id: String,
}

pub mod delete;
pub mod list;
pub mod save;
pub mod save_by_id;

use crate::state::AppState;
use axum::routing::{delete as delete_route, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/bookmarks endpoints (mounted at /api/bookmarks)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_bookmarks).post(save::save_bookmark))
        .route("/by-id", post(save_by_id::save_bookmark_by_id))
        .route("/{catalog_id}", delete_route(delete::delete_bookmark))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_bookmarks,
        save::save_bookmark,
        save_by_id::save_bookmark_by_id,
        delete::delete_bookmark
    ),
    components(schemas(
        list::ListBookmarksResponse,
        save::SaveBookmarkResponse,
        save_by_id::SaveByIdRequest,
        delete::DeleteBookmarkResponse,
    ))
)]
pub struct ApiDoc;

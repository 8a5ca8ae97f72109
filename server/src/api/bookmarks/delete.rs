use crate::state::AppState;
use crate::user::CurrentUser;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteBookmarkResponse {
    pub success: bool,
    pub message: String,
    /// Number of bookmarks removed, 0 or 1
    pub removed: usize,
}

#[utoipa::path(
    delete,
    path = "/api/bookmarks/{catalog_id}",
    tag = "bookmarks",
    params(
        ("catalog_id" = i64, Path, description = "Catalog recipe ID"),
        ("X-User-Id" = Option<String>, Header, description = "User owning the bookmark")
    ),
    responses(
        (status = 200, description = "Bookmark removed, or there was none", body = DeleteBookmarkResponse),
        (status = 500, description = "Bookmark store failure", body = DeleteBookmarkResponse)
    )
)]
pub async fn delete_bookmark(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(catalog_id): Path<i64>,
) -> impl IntoResponse {
    // Hard delete, scoped to the caller
    match state
        .bookmarks
        .delete_by_catalog_id_and_user(catalog_id, &user_id)
    {
        Ok(removed) => {
            let message = if removed == 0 {
                "Recipe was not bookmarked"
            } else {
                "Recipe deleted successfully"
            };
            (
                StatusCode::OK,
                Json(DeleteBookmarkResponse {
                    success: true,
                    message: message.to_string(),
                    removed,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete bookmark: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteBookmarkResponse {
                    success: false,
                    message: "Failed to delete recipe".to_string(),
                    removed: 0,
                }),
            )
                .into_response()
        }
    }
}

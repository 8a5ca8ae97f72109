use crate::api::ErrorResponse;
use crate::state::AppState;
use crate::user::CurrentUser;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder_core::Bookmark;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ListBookmarksResponse {
    pub bookmarks: Vec<Bookmark>,
}

#[utoipa::path(
    get,
    path = "/api/bookmarks",
    tag = "bookmarks",
    params(
        ("X-User-Id" = Option<String>, Header, description = "User the bookmarks belong to")
    ),
    responses(
        (status = 200, description = "Saved recipes, newest first", body = ListBookmarksResponse),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (status = 500, description = "Bookmark store failure", body = ErrorResponse)
    )
)]
pub async fn list_bookmarks(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.bookmarks.list_by_user(&user_id) {
        Ok(bookmarks) => (StatusCode::OK, Json(ListBookmarksResponse { bookmarks })).into_response(),
        Err(e) => {
            tracing::error!("Failed to list bookmarks: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch saved recipes")),
            )
                .into_response()
        }
    }
}

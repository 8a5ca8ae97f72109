use crate::state::AppState;
use crate::user::CurrentUser;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use larder_core::{Bookmark, Recipe};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveBookmarkResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<Bookmark>,
}

impl SaveBookmarkResponse {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            bookmark: None,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/bookmarks",
    tag = "bookmarks",
    request_body = Recipe,
    params(
        ("X-User-Id" = Option<String>, Header, description = "User saving the recipe")
    ),
    responses(
        (status = 201, description = "Recipe saved", body = SaveBookmarkResponse),
        (status = 200, description = "Recipe was already saved", body = SaveBookmarkResponse),
        (status = 400, description = "Invalid recipe", body = SaveBookmarkResponse),
        (status = 500, description = "Bookmark store failure", body = SaveBookmarkResponse)
    )
)]
pub async fn save_bookmark(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let recipe = match payload
        .map_err(|e| e.body_text())
        .and_then(|Json(body)| serde_json::from_value::<Recipe>(body).map_err(|e| e.to_string()))
    {
        Ok(recipe) if recipe.id > 0 && !recipe.title.trim().is_empty() => recipe,
        Ok(_) => return bad_request("Recipe needs a positive id and a title"),
        Err(e) => {
            tracing::debug!("Rejected recipe body: {}", e);
            return bad_request("Request body is not a valid recipe");
        }
    };

    match state.bookmarks.create(&recipe, &user_id) {
        Ok(outcome) => {
            let (status, message) = if outcome.was_created() {
                tracing::info!(catalog_id = outcome.bookmark().catalog_id, "Bookmark created");
                (StatusCode::CREATED, "Recipe saved successfully")
            } else {
                (StatusCode::OK, "Recipe already saved")
            };
            (
                status,
                Json(SaveBookmarkResponse {
                    success: true,
                    message: message.to_string(),
                    bookmark: Some(outcome.into_bookmark()),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to save bookmark: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveBookmarkResponse::failure("Failed to save recipe")),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(SaveBookmarkResponse::failure(message)),
    )
        .into_response()
}

use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Header naming the user a request acts for.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Longest user id the bookmark table accepts.
pub const MAX_USER_ID_LEN: usize = 255;

/// Extractor providing the user id every bookmark operation is scoped to.
///
/// Taken from the `X-User-Id` header, or the configured default user when the
/// header is absent. There is no authentication behind it.
/// ```ignore
/// async fn my_handler(CurrentUser(user_id): CurrentUser) -> impl IntoResponse {
///     // user_id is a String
/// }
/// ```
pub struct CurrentUser(pub String);

#[derive(Debug)]
pub enum UserIdError {
    InvalidHeader,
    Empty,
    TooLong,
}

impl IntoResponse for UserIdError {
    fn into_response(self) -> Response {
        let message = match self {
            UserIdError::InvalidHeader => "X-User-Id header is not valid text",
            UserIdError::Empty => "X-User-Id header cannot be empty",
            UserIdError::TooLong => "X-User-Id header is too long",
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: message.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = UserIdError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(USER_ID_HEADER) else {
            let ctx = AppState::from_ref(state);
            return Ok(CurrentUser(ctx.default_user_id.clone()));
        };

        let user_id = header
            .to_str()
            .map_err(|_| UserIdError::InvalidHeader)?
            .trim();

        if user_id.is_empty() {
            return Err(UserIdError::Empty);
        }
        if user_id.len() > MAX_USER_ID_LEN {
            return Err(UserIdError::TooLong);
        }

        Ok(CurrentUser(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_state;
    use axum::http::Request;
    use larder_core::MockCatalog;

    async fn extract(header: Option<&[u8]>) -> Result<String, UserIdError> {
        let mut builder = Request::builder().uri("/api/bookmarks");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let state = test_state(MockCatalog::new());
        CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .map(|CurrentUser(id)| id)
    }

    #[tokio::test]
    async fn test_missing_header_uses_default_user() {
        assert_eq!(extract(None).await.unwrap(), "test-default-user");
    }

    #[tokio::test]
    async fn test_header_value_is_trimmed() {
        assert_eq!(extract(Some(&b" alice "[..])).await.unwrap(), "alice");
    }

    #[tokio::test]
    async fn test_blank_header_rejected() {
        assert!(matches!(
            extract(Some(&b"   "[..])).await,
            Err(UserIdError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_non_text_header_rejected() {
        assert!(matches!(
            extract(Some(&[0xff_u8, 0xfe][..])).await,
            Err(UserIdError::InvalidHeader)
        ));
    }

    #[tokio::test]
    async fn test_overlong_header_rejected() {
        let long = "u".repeat(MAX_USER_ID_LEN + 1);
        assert!(matches!(
            extract(Some(long.as_bytes())).await,
            Err(UserIdError::TooLong)
        ));
    }
}

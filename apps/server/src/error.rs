use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error wrapper for API handlers; anything `anyhow` can hold maps to a 500
/// with a JSON body.
pub struct ApiError(anyhow::Error);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:#}", self.0);
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_health() -> ApiResult<Json<serde_json::Value>> {
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

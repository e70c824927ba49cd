use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::models::InitialPageData;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Initial page data. Always 200; an upstream failure yields no videos.
pub async fn page_data(State(state): State<AppState>) -> Json<InitialPageData> {
    Json(state.loader.load().await)
}

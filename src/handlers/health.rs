use crate::models::api::HealthResponse;
use axum::{http::StatusCode, response::IntoResponse, Json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Health check handler
///
/// GET /api/health
pub async fn health_handler() -> impl IntoResponse {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp,
        }),
    )
}

use crate::models::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

pub async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Invalid endpoint. Valid endpoints: /api/health, /api/users".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_returns_404() {
        let response = fallback_handler().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

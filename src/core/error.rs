// Centralized error handling for the user API

use crate::models::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the user endpoints.
///
/// The 400/404 variants carry fixed client-facing messages. The 500
/// variants wrap the underlying fault, which is logged server-side; the
/// client only ever sees the generic Display text.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Username and password required")]
    MissingCredentials,

    #[error("Username must be 3-20 characters, alphanumeric only")]
    InvalidUsername,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Invalid user ID")]
    InvalidUserId,

    #[error("User not found")]
    NotFound,

    #[error("Failed to create user")]
    CreateFailed(#[source] anyhow::Error),

    #[error("Failed to fetch user")]
    FetchFailed(#[source] anyhow::Error),

    #[error("Failed to fetch users")]
    ListFailed(#[source] anyhow::Error),
}

impl UserError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::MissingCredentials
            | UserError::InvalidUsername
            | UserError::PasswordTooShort
            | UserError::InvalidUserId => StatusCode::BAD_REQUEST,
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::CreateFailed(_) | UserError::FetchFailed(_) | UserError::ListFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        // Store faults are diagnosed here; validation failures are
        // client-caused and not logged as server errors
        match &self {
            UserError::CreateFailed(source)
            | UserError::FetchFailed(source)
            | UserError::ListFailed(source) => {
                error!(error = %source, "User store failure");
            }
            _ => {}
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        assert_eq!(UserError::MissingCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UserError::InvalidUsername.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UserError::PasswordTooShort.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UserError::InvalidUserId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UserError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            UserError::CreateFailed(anyhow!("disk full")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_facing_messages() {
        assert_eq!(
            UserError::MissingCredentials.to_string(),
            "Username and password required"
        );
        assert_eq!(
            UserError::InvalidUsername.to_string(),
            "Username must be 3-20 characters, alphanumeric only"
        );
        assert_eq!(
            UserError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(UserError::InvalidUserId.to_string(), "Invalid user ID");
        assert_eq!(UserError::NotFound.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_internal_error_body_hides_source() {
        let response =
            UserError::CreateFailed(anyhow!("connection refused: db password=hunter2"))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let (_, body) = response.into_parts();
        let bytes = Body::new(body).collect().await.unwrap().to_bytes();
        let parsed: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed.error, "Failed to create user");
        assert!(!String::from_utf8_lossy(&bytes).contains("hunter2"));
    }
}

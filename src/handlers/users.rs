use crate::core::error::UserError;
use crate::core::state::AppState;
use crate::models::api::{CreateUserResponse, UserResponse, UsersListResponse};
use crate::models::user::UserProfile;
use crate::security::sanitize;
use crate::validation::patterns::{self, FieldKind};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Coerce a raw JSON field to text the way a form layer would: strings
/// pass through, numbers are stringified, anything else counts as absent.
fn coerce_to_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Create a user after sanitizing and validating the payload
///
/// POST /api/users
///
/// The body is taken as a raw JSON value: whatever its top-level shape
/// (object, array, scalar, null), missing credentials funnel into the same
/// 400 instead of a deserialization rejection.
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Response, UserError> {
    let raw_username =
        coerce_to_text(payload.get("username")).ok_or(UserError::MissingCredentials)?;
    let raw_password =
        coerce_to_text(payload.get("password")).ok_or(UserError::MissingCredentials)?;

    // Strip tag-shaped markup before the format check. Validation runs on
    // the sanitized value, so input that shrinks below the minimum length
    // or exposes disallowed characters is rejected, not mutated through.
    let username = sanitize::strip_tags(&raw_username);
    let password = raw_password.trim().to_string();

    if !patterns::validate_input(&username, FieldKind::Username) {
        warn!(username = %username, "Rejected username failing format check");
        return Err(UserError::InvalidUsername);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }

    // Only the validated pair reaches the store; extra payload fields are
    // never read, so nothing else can be injected into the record
    let user = state
        .user_store
        .create_user(username, password)
        .map_err(UserError::CreateFailed)?;

    info!(user_id = user.id, username = %user.username, "User created");

    Ok((
        StatusCode::OK,
        Json(CreateUserResponse {
            user: UserProfile::from(&user),
            message: "User created successfully".to_string(),
        }),
    )
        .into_response())
}

/// Fetch a single user by id
///
/// GET /api/users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, UserError> {
    let id: u64 = id.parse().map_err(|_| UserError::InvalidUserId)?;

    let user = state
        .user_store
        .get_user(id)
        .map_err(UserError::FetchFailed)?
        .ok_or(UserError::NotFound)?;

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            user: UserProfile::from(&user),
        }),
    )
        .into_response())
}

/// List all users
///
/// GET /api/users
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, UserError> {
    let users = state.user_store.list_users().map_err(UserError::ListFailed)?;

    Ok((
        StatusCode::OK,
        Json(UsersListResponse {
            users: users.iter().map(UserProfile::from).collect(),
        }),
    )
        .into_response())
}

// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(crate::handlers::health::health_handler))
        .route(
            "/api/users",
            get(crate::handlers::users::list_users_handler)
                .post(crate::handlers::users::create_user_handler),
        )
        .route(
            "/api/users/{id}",
            get(crate::handlers::users::get_user_handler),
        )

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}

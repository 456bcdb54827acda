pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::feedback::handlers as feedback_handlers;
use crate::jobs::handlers as job_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth (cosmetic: no credential verification, nothing persisted)
        .route("/api/v1/auth/signin", post(auth_handlers::handle_sign_in))
        .route("/api/v1/auth/signup", post(auth_handlers::handle_sign_up))
        .route(
            "/api/v1/auth/change-password",
            post(auth_handlers::handle_change_password),
        )
        .route("/api/v1/auth/signout", post(auth_handlers::handle_sign_out))
        // Job search
        .route("/api/v1/jobs/catalog", get(job_handlers::handle_catalog))
        .route("/api/v1/jobs/search", get(job_handlers::handle_search))
        // Resume upload + feedback
        .route(
            "/api/v1/resumes/extract",
            post(feedback_handlers::handle_extract),
        )
        .route(
            "/api/v1/resumes/feedback",
            post(feedback_handlers::handle_feedback),
        )
        .with_state(state)
}

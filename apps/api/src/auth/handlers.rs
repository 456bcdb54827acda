use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: Uuid,
    pub username: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignOutRequest {
    pub token: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/v1/auth/signin
///
/// No credential verification exists; any non-empty pair is accepted.
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Please enter valid credentials.".to_string(),
        ));
    }

    let session = state.sessions.sign_in(req.username.trim()).await;
    info!("Signed in '{}'", session.username);

    Ok(Json(SignInResponse {
        token: session.token,
        message: format!("Welcome back, {}!", session.username),
        username: session.username,
    }))
}

/// POST /api/v1/auth/signup
///
/// Acknowledgement only; no account is created anywhere.
pub async fn handle_sign_up(
    Json(req): Json<SignUpRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Please enter valid credentials.".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Account created successfully!".to_string(),
    }))
}

/// POST /api/v1/auth/change-password
///
/// Acknowledgement only; nothing is checked or stored.
pub async fn handle_change_password(
    Json(_req): Json<ChangePasswordRequest>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Password changed successfully!".to_string(),
    })
}

/// POST /api/v1/auth/signout
pub async fn handle_sign_out(
    State(state): State<AppState>,
    Json(req): Json<SignOutRequest>,
) -> Json<MessageResponse> {
    state.sessions.sign_out(req.token).await;
    Json(MessageResponse {
        message: "Signed out successfully!".to_string(),
    })
}

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::profile::validation::validate_registration;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub riasec_code: String,
    pub message: String,
    pub active_sessions: usize,
}

/// POST /api/user/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<RegisterResponse>, AppError> {
    state.profiles.purge_expired().await;

    let issues = validate_registration(&profile);
    if !issues.is_empty() {
        return Err(AppError::Validation(issues.join("; ")));
    }

    let session = state.profiles.create(profile).await;
    let active_sessions = state.profiles.active_count().await;
    Ok(Json(RegisterResponse {
        user_id: session.user_id,
        riasec_code: session.riasec_code,
        message: "User registered successfully".to_string(),
        active_sessions,
    }))
}

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// POST /api/user/logout
/// Idempotent: logging out an unknown or expired session still succeeds.
pub async fn handle_logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Json<LogoutResponse> {
    let removed = state.profiles.remove(req.user_id).await;
    let message = if removed {
        "User logged out successfully".to_string()
    } else {
        "No active session".to_string()
    };
    Json(LogoutResponse { message })
}

#[derive(Serialize)]
pub struct DebugSessionsResponse {
    pub active_sessions_count: usize,
    pub session_ids: Vec<Uuid>,
}

/// GET /api/debug/sessions
pub async fn handle_debug_sessions(State(state): State<AppState>) -> Json<DebugSessionsResponse> {
    state.profiles.purge_expired().await;
    Json(DebugSessionsResponse {
        active_sessions_count: state.profiles.active_count().await,
        session_ids: state.profiles.session_ids().await,
    })
}

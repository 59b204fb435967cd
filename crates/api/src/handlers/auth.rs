//! Handlers for the `/auth` resource (login, logout, session info).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use atelier_core::error::CoreError;
use atelier_core::types::Timestamp;

use crate::auth::session::verify_credentials;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque session token; valid until logout or process restart.
    pub token: String,
    pub name: String,
}

/// Session info returned by `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub name: String,
    pub logged_in_at: Timestamp,
}

/// POST /api/v1/auth/login
///
/// Authenticate with the configured shared secrets. Any mismatch returns
/// the same generic failure.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    if !verify_credentials(state.config.admin.as_ref(), &input.name, &input.password) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = state.sessions.create(&input.name).await;
    tracing::info!(admin = %input.name, "Admin logged in");

    Ok(Json(DataResponse::new(LoginResponse {
        token,
        name: input.name,
    })))
}

/// POST /api/v1/auth/logout
///
/// Discard the current session. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, admin: RequireAdmin) -> AppResult<StatusCode> {
    state.sessions.remove(&admin.token).await;
    tracing::info!(admin = %admin.session.name, "Admin logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// Current session info for the presented token.
pub async fn session(admin: RequireAdmin) -> AppResult<Json<DataResponse<SessionInfo>>> {
    Ok(Json(DataResponse::new(SessionInfo {
        name: admin.session.name,
        logged_in_at: admin.session.logged_in_at,
    })))
}

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// `"configured"` or `"fallback"`.
    pub backend: &'static str,
    /// Whether the database is reachable; false in fallback mode.
    pub db_healthy: bool,
}

/// GET /health -- returns service and gallery-backend health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let configured = state.gallery.is_configured();

    let db_healthy = match state.gallery.pool() {
        Some(pool) => atelier_db::health_check(pool).await.is_ok(),
        None => false,
    };

    // Fallback mode is a supported state, not a degradation.
    let status = if !configured || db_healthy {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        backend: if configured { "configured" } else { "fallback" },
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

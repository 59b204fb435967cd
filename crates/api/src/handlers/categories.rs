//! Handlers for category reads and admin category management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_db::models::category::NewCategory;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/gallery/categories
///
/// Category names, "All" first. Same fallback discipline as the artwork
/// list.
pub async fn list_categories(State(state): State<AppState>) -> Json<DataResponse<Vec<String>>> {
    Json(state.gallery.fetch_categories().await.into())
}

/// POST /api/v1/gallery/categories
///
/// Create a category at the end of the display order. Admin only.
pub async fn create_category(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<NewCategory>,
) -> AppResult<impl IntoResponse> {
    let record = state.gallery.add_category(&input.name).await?;

    tracing::info!(category = %record.name, admin = %admin.session.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(record))))
}

/// DELETE /api/v1/gallery/categories/{name}
///
/// Remove a category; its artworks are relabeled to "Uncategorized".
/// Admin only.
pub async fn delete_category(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.gallery.remove_category(&name).await?;

    tracing::info!(category = %name, admin = %admin.session.name, "Category removed");

    Ok(StatusCode::NO_CONTENT)
}

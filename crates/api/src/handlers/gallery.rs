//! Handlers for artwork reads, uploads, edits, deletion, and reordering.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use atelier_core::artwork::Artwork;
use atelier_core::types::DbId;
use atelier_db::models::artwork::ArtworkPatch;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/gallery/artworks
///
/// All artworks in display order. Never fails: serves the bundled catalog
/// (with the backend error captured in the envelope) when the backend is
/// missing or unreachable.
pub async fn list_artworks(State(state): State<AppState>) -> Json<DataResponse<Vec<Artwork>>> {
    Json(state.gallery.fetch_artworks().await.into())
}

/// GET /api/v1/gallery/artworks/featured
///
/// The landing-page featured strip.
pub async fn featured_artworks(State(state): State<AppState>) -> Json<DataResponse<Vec<Artwork>>> {
    Json(state.gallery.featured_artworks().await.into())
}

/// POST /api/v1/gallery/artworks
///
/// Upload a new artwork. Admin only. Multipart fields: `file` (the image),
/// `title`, `category`.
pub async fn upload_artwork(
    admin: RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut title: Option<String> = None;
    let mut category: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .ok_or_else(|| AppError::BadRequest("File part has no file name".into()))?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((file_name, bytes.to_vec()));
            }
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "category" => {
                category = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            _ => continue,
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' part".into()))?;
    let title = title.ok_or_else(|| AppError::BadRequest("Missing 'title' part".into()))?;
    let category =
        category.ok_or_else(|| AppError::BadRequest("Missing 'category' part".into()))?;

    let artwork = state
        .gallery
        .upload_artwork(&file_name, bytes, &title, &category)
        .await?;

    tracing::info!(
        artwork_id = artwork.id,
        title = %artwork.title,
        category = %artwork.category,
        display_order = artwork.display_order,
        admin = %admin.session.name,
        "Artwork uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(artwork))))
}

/// PATCH /api/v1/gallery/artworks/{id}
///
/// Edit an artwork's title and/or category. Admin only.
pub async fn update_artwork(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<ArtworkPatch>,
) -> AppResult<Json<DataResponse<Artwork>>> {
    let artwork = state.gallery.update_artwork(id, &patch).await?;

    tracing::info!(artwork_id = id, admin = %admin.session.name, "Artwork updated");

    Ok(Json(DataResponse::new(artwork)))
}

/// DELETE /api/v1/gallery/artworks/{id}
///
/// Delete an artwork and its stored image. Admin only.
pub async fn delete_artwork(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.gallery.delete_artwork(id).await?;

    tracing::info!(artwork_id = id, admin = %admin.session.name, "Artwork deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Request body for `PUT /gallery/artworks/order`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    /// Artwork ids in their new display order.
    pub order: Vec<DbId>,
}

/// PUT /api/v1/gallery/artworks/order
///
/// Persist a manual reordering of the gallery. Admin only.
pub async fn reorder_artworks(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<StatusCode> {
    state.gallery.reorder_artworks(&input.order).await?;

    tracing::info!(
        count = input.order.len(),
        admin = %admin.session.name,
        "Artworks reordered",
    );

    Ok(StatusCode::NO_CONTENT)
}

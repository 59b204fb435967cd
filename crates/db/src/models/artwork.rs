//! Artwork row model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::artwork::Artwork;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `artworks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtworkRecord {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub image_url: String,
    /// Object-store key, e.g. `gallery/<uuid>.jpg`.
    pub image_path: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ArtworkRecord> for Artwork {
    fn from(record: ArtworkRecord) -> Self {
        Artwork {
            id: record.id,
            title: record.title,
            category: record.category,
            image_url: record.image_url,
            image_path: Some(record.image_path),
            display_order: record.display_order,
        }
    }
}

/// Insert DTO, assembled server-side after the image is stored.
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub image_path: String,
    pub display_order: i32,
}

/// Patch DTO for edits. Only title and category are editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkPatch {
    pub title: Option<String>,
    pub category: Option<String>,
}

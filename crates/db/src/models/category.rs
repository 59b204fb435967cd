//! Category row model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRecord {
    pub id: DbId,
    pub name: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create DTO for new categories.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

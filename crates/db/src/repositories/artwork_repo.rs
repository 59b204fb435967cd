//! Repository for the `artworks` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::artwork::{ArtworkPatch, ArtworkRecord, NewArtwork};

/// Column list for `artworks` queries.
const ARTWORK_COLUMNS: &str = "\
    id, title, category, image_url, image_path, \
    display_order, created_at, updated_at";

/// Provides CRUD operations for artwork records.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// List all artworks ordered by display order ascending.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<ArtworkRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, ArtworkRecord>(&query).fetch_all(pool).await
    }

    /// Find an artwork by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ArtworkRecord>, sqlx::Error> {
        let query = format!("SELECT {ARTWORK_COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, ArtworkRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Next display order: one past the current maximum, or 0 when empty.
    pub async fn next_display_order(pool: &PgPool) -> Result<i32, sqlx::Error> {
        let row: (i32,) =
            sqlx::query_as("SELECT COALESCE(MAX(display_order) + 1, 0) FROM artworks")
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Insert a new artwork record.
    pub async fn insert(pool: &PgPool, input: &NewArtwork) -> Result<ArtworkRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks (title, category, image_url, image_path, display_order) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ARTWORK_COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkRecord>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.image_path)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update title and/or category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &ArtworkPatch,
    ) -> Result<Option<ArtworkRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET \
                title = COALESCE($2, title), \
                category = COALESCE($3, category), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ARTWORK_COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkRecord>(&query)
            .bind(id)
            .bind(patch.title.as_deref())
            .bind(patch.category.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Set the display order of one artwork. A missing id is a no-op.
    pub async fn set_display_order(
        pool: &PgPool,
        id: DbId,
        display_order: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE artworks SET display_order = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(display_order)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete an artwork by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Relabel every artwork in category `from` to category `to`.
    /// Returns the number of artworks moved.
    pub async fn reassign_category(
        pool: &PgPool,
        from: &str,
        to: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE artworks SET category = $2, updated_at = NOW() WHERE category = $1",
        )
        .bind(from)
        .bind(to)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::CategoryRecord;

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "id, name, display_order, created_at, updated_at";

/// Provides CRUD operations for category rows.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by display order ascending.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, CategoryRecord>(&query).fetch_all(pool).await
    }

    /// Next display order: one past the current maximum, or 0 when empty.
    pub async fn next_display_order(pool: &PgPool) -> Result<i32, sqlx::Error> {
        let row: (i32,) =
            sqlx::query_as("SELECT COALESCE(MAX(display_order) + 1, 0) FROM categories")
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Insert a new category. A duplicate name violates `uq_categories_name`.
    pub async fn insert(
        pool: &PgPool,
        name: &str,
        display_order: i32,
    ) -> Result<CategoryRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, display_order) VALUES ($1, $2) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRecord>(&query)
            .bind(name)
            .bind(display_order)
            .fetch_one(pool)
            .await
    }

    /// Delete a category by name. Returns true if a row was deleted.
    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

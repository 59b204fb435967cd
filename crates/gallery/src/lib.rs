//! The gallery data-access layer.
//!
//! Translates gallery intents (fetch, upload, edit, reorder, categorize)
//! into repository and object-store calls. Owns the two disciplines that
//! define the system's behavior:
//!
//! - **Fallback reads.** Reads never fail. With no backend configured they
//!   serve the bundled catalog; with a configured backend that errors, they
//!   serve the bundled catalog and capture the error alongside the data.
//! - **Fail-fast writes.** Writes short-circuit with
//!   [`CoreError::NotConfigured`] before touching the network when no
//!   backend is configured.

use std::sync::Arc;

use atelier_core::artwork::{self, Artwork, CATEGORY_ALL, CATEGORY_UNCATEGORIZED};
use atelier_core::catalog;
use atelier_core::error::CoreError;
use atelier_core::naming;
use atelier_core::types::DbId;
use atelier_core::validate::{validate_category_label, validate_new_category_name, validate_title};
use atelier_db::models::artwork::{ArtworkPatch, NewArtwork};
use atelier_db::models::category::CategoryRecord;
use atelier_db::repositories::{ArtworkRepo, CategoryRepo};
use atelier_db::DbPool;
use atelier_storage::{ObjectStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Outcome of a read that never fails: the data actually served, plus the
/// backend error when that data is the bundled fallback.
#[derive(Debug)]
pub struct Fetched<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T> Fetched<T> {
    fn ok(data: T) -> Self {
        Self { data, error: None }
    }

    fn degraded(data: T, error: &sqlx::Error) -> Self {
        Self {
            data,
            error: Some(error.to_string()),
        }
    }
}

/// A configured gallery backend: database plus image store.
pub struct Backend {
    pub pool: DbPool,
    pub store: Arc<dyn ObjectStore>,
}

/// The gallery service. Constructed once at startup, in either configured
/// or fallback mode, and shared across handlers.
pub struct GalleryService {
    backend: Option<Backend>,
}

impl GalleryService {
    pub fn configured(pool: DbPool, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            backend: Some(Backend { pool, store }),
        }
    }

    pub fn fallback() -> Self {
        Self { backend: None }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// The database pool, when a backend is configured.
    pub fn pool(&self) -> Option<&DbPool> {
        self.backend.as_ref().map(|b| &b.pool)
    }

    fn backend(&self) -> Result<&Backend, GalleryError> {
        self.backend
            .as_ref()
            .ok_or(GalleryError::Core(CoreError::NotConfigured))
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// All artworks, ordered by display order ascending.
    pub async fn fetch_artworks(&self) -> Fetched<Vec<Artwork>> {
        let Some(backend) = &self.backend else {
            return Fetched::ok(catalog::fallback_artworks());
        };

        match ArtworkRepo::list_ordered(&backend.pool).await {
            Ok(records) => Fetched::ok(records.into_iter().map(Artwork::from).collect()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch artworks, serving bundled catalog");
                Fetched::degraded(catalog::fallback_artworks(), &err)
            }
        }
    }

    /// Category names with the synthesized "All" entry first.
    pub async fn fetch_categories(&self) -> Fetched<Vec<String>> {
        let Some(backend) = &self.backend else {
            return Fetched::ok(catalog::fallback_categories());
        };

        match CategoryRepo::list_ordered(&backend.pool).await {
            Ok(records) => {
                let mut names = Vec::with_capacity(records.len() + 1);
                names.push(CATEGORY_ALL.to_string());
                names.extend(records.into_iter().map(|c| c.name));
                Fetched::ok(names)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch categories, serving defaults");
                Fetched::degraded(catalog::fallback_categories(), &err)
            }
        }
    }

    /// The landing-page featured strip, derived from the current artwork
    /// list in either mode.
    pub async fn featured_artworks(&self) -> Fetched<Vec<Artwork>> {
        let fetched = self.fetch_artworks().await;
        Fetched {
            data: artwork::featured(&fetched.data),
            error: fetched.error,
        }
    }

    // -----------------------------------------------------------------------
    // Artwork writes
    // -----------------------------------------------------------------------

    /// Store an uploaded image and create its artwork record.
    ///
    /// Steps: validate inputs, store the binary under a fresh
    /// `gallery/<uuid>.<ext>` key, resolve its public URL, take the next
    /// display order, insert the record. Any failure aborts; an object
    /// already stored when the insert fails is left orphaned in the store.
    pub async fn upload_artwork(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        title: &str,
        category: &str,
    ) -> Result<Artwork, GalleryError> {
        let backend = self.backend()?;

        validate_title(title)?;
        validate_category_label(category)?;
        let ext = naming::file_extension(file_name).ok_or_else(|| {
            CoreError::Validation(format!("File name '{file_name}' has no extension"))
        })?;
        naming::validate_extension(&ext)?;

        let key = naming::object_key(&ext);
        backend
            .store
            .put(&key, bytes, naming::content_type_for(&ext))
            .await?;
        let image_url = backend.store.public_url(&key);

        let display_order = ArtworkRepo::next_display_order(&backend.pool).await?;
        let record = ArtworkRepo::insert(
            &backend.pool,
            &NewArtwork {
                title: title.trim().to_string(),
                category: category.to_string(),
                image_url,
                image_path: key,
                display_order,
            },
        )
        .await?;

        Ok(record.into())
    }

    /// Edit an artwork's title and/or category.
    pub async fn update_artwork(
        &self,
        id: DbId,
        patch: &ArtworkPatch,
    ) -> Result<Artwork, GalleryError> {
        let backend = self.backend()?;

        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(category) = &patch.category {
            validate_category_label(category)?;
        }

        let record = ArtworkRepo::update(&backend.pool, id, patch)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Artwork",
                id,
            })?;

        Ok(record.into())
    }

    /// Delete an artwork: remove its stored object, then its record.
    ///
    /// A storage failure is logged and the record delete still proceeds; a
    /// record-delete failure is the operation's failure.
    pub async fn delete_artwork(&self, id: DbId) -> Result<(), GalleryError> {
        let backend = self.backend()?;

        let record = ArtworkRepo::find_by_id(&backend.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Artwork",
                id,
            })?;

        if let Err(err) = backend.store.remove(&record.image_path).await {
            tracing::warn!(
                artwork_id = id,
                key = %record.image_path,
                error = %err,
                "Failed to remove stored object, deleting record anyway",
            );
        }

        let deleted = ArtworkRepo::delete(&backend.pool, id).await?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Artwork",
                id,
            }
            .into());
        }

        Ok(())
    }

    /// Rewrite display orders to match the given id sequence: the artwork
    /// at `ids[i]` gets display order `i`.
    ///
    /// The per-id updates are dispatched concurrently and awaited jointly;
    /// there is no transaction, so a partial failure leaves a mixed
    /// ordering. Ids not in the list keep their old order values.
    pub async fn reorder_artworks(&self, ids: &[DbId]) -> Result<(), GalleryError> {
        let backend = self.backend()?;

        let updates = ids.iter().enumerate().map(|(index, id)| {
            ArtworkRepo::set_display_order(&backend.pool, *id, index as i32)
        });
        let results = futures::future::join_all(updates).await;
        for result in results {
            result?;
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Category writes
    // -----------------------------------------------------------------------

    /// Create a category at the end of the display order.
    pub async fn add_category(&self, name: &str) -> Result<CategoryRecord, GalleryError> {
        let backend = self.backend()?;

        validate_new_category_name(name)?;
        let name = name.trim();

        let display_order = CategoryRepo::next_display_order(&backend.pool).await?;
        let record = CategoryRepo::insert(&backend.pool, name, display_order).await?;

        Ok(record)
    }

    /// Remove a category, relabeling its artworks to "Uncategorized" first.
    /// The two steps are not atomic.
    pub async fn remove_category(&self, name: &str) -> Result<(), GalleryError> {
        let backend = self.backend()?;

        let moved =
            ArtworkRepo::reassign_category(&backend.pool, name, CATEGORY_UNCATEGORIZED).await?;
        if moved > 0 {
            tracing::info!(category = name, moved, "Artworks relabeled to Uncategorized");
        }

        let deleted = CategoryRepo::delete_by_name(&backend.pool, name).await?;
        if !deleted {
            return Err(CoreError::NotFoundByName {
                entity: "Category",
                name: name.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

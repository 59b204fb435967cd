//! Object storage providers for gallery images.
//!
//! Gallery images are write-once binaries addressed by an opaque key
//! (`gallery/<uuid>.<ext>`) and served to browsers via a public URL. The
//! [`ObjectStore`] trait is the seam between the gallery service and the
//! concrete backend: S3-compatible storage in production, the local
//! filesystem for development and tests.

pub mod local;
pub mod s3;

pub use local::LocalObjectStore;
pub use s3::S3ObjectStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object store request failed: {0}")]
    Backend(String),
}

/// Backend-agnostic interface to the image store.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, replacing any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    /// Remove the object at `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Publicly resolvable URL for the object at `key`.
    fn public_url(&self, key: &str) -> String;
}

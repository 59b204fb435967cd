//! Local-filesystem object store provider.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{ObjectStore, StorageError};

/// Object store writing under a root directory. The directory is expected
/// to be served statically (e.g. by a reverse proxy) at `public_base_url`.
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait::async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let dest = self.path_for(key);
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&dest, &bytes).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path(), "http://localhost:8080/media");

        store
            .put("gallery/test.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        let on_disk = dir.path().join("gallery/test.png");
        assert_eq!(std::fs::read(&on_disk).unwrap(), vec![1, 2, 3]);

        store.remove("gallery/test.png").await.unwrap();
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path(), "http://localhost:8080/media");
        assert!(store.remove("gallery/never-existed.jpg").await.is_ok());
    }

    #[test]
    fn public_url_joins_without_double_slash() {
        let store = LocalObjectStore::new("/tmp/media", "http://localhost:8080/media/");
        assert_eq!(
            store.public_url("gallery/a.jpg"),
            "http://localhost:8080/media/gallery/a.jpg"
        );
    }
}

//! Directory-backed storage. Writes `{dir}/{id}.png`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::StippleError;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an image with this id is written to.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.png", id))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn save(&self, id: &str, png: &[u8]) -> Result<(), StippleError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            StippleError::Storage(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        let path = self.path_for(id);
        tokio::fs::write(&path, png)
            .await
            .map_err(|e| StippleError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = png.len(), "image written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(tmp.path().join("images"));

        storage.save("abc", b"\x89PNG").await.unwrap();

        let written = std::fs::read(tmp.path().join("images").join("abc.png")).unwrap();
        assert_eq!(written, b"\x89PNG");
    }

    #[tokio::test]
    async fn test_save_into_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.save("one", b"1").await.unwrap();
        storage.save("two", b"2").await.unwrap();

        assert!(storage.path_for("one").exists());
        assert!(storage.path_for("two").exists());
    }

    #[tokio::test]
    async fn test_unwritable_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"").unwrap();
        let storage = LocalStorage::new(blocker.join("images"));

        let err = storage.save("abc", b"x").await.unwrap_err();
        assert!(matches!(err, StippleError::Storage(_)));
    }
}

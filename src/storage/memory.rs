//! In-memory storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Storage;
use crate::error::StippleError;

/// Keeps every saved image in memory, in save order.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    images: RwLock<Vec<(String, Vec<u8>)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of `(id, png)` pairs saved so far.
    pub async fn images(&self) -> Vec<(String, Vec<u8>)> {
        self.images.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.images.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.images.read().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn save(&self, id: &str, png: &[u8]) -> Result<(), StippleError> {
        self.images.write().await.push((id.to_string(), png.to_vec()));
        Ok(())
    }
}

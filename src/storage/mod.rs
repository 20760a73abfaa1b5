//! # Image Storage
//!
//! Rendered cards are persisted once per request through a [`Storage`]
//! backend chosen at startup.
//!
//! ## Available Backends
//!
//! - [`local`]: PNG files in a directory
//! - [`blob`]: HTTP blob store, one key per image
//! - [`memory`]: In-process, for tests and embedding

pub mod blob;
pub mod local;
pub mod memory;

pub use blob::BlobStorage;
pub use local::LocalStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use std::{path::PathBuf, sync::Arc};

use crate::error::StippleError;

/// A write-only sink for rendered PNGs.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Persist `png` under the unique id `id`.
    async fn save(&self, id: &str, png: &[u8]) -> Result<(), StippleError>;
}

/// Which backend to build, and its settings.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local { dir: PathBuf },
    Blob { base_url: String, token: Option<String> },
    Memory,
}

impl StorageConfig {
    /// Build the configured backend.
    pub fn build(self) -> Result<Arc<dyn Storage>, StippleError> {
        let storage: Arc<dyn Storage> = match self {
            StorageConfig::Local { dir } => Arc::new(LocalStorage::new(dir)),
            StorageConfig::Blob { base_url, token } => Arc::new(BlobStorage::new(base_url, token)?),
            StorageConfig::Memory => Arc::new(MemoryStorage::new()),
        };
        Ok(storage)
    }
}

//! Server state and configuration.

use rand::{SeedableRng, rngs::StdRng};
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::{Storage, StorageConfig};

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8000")
    pub listen_addr: String,
    /// Where rendered cards are persisted
    pub storage: StorageConfig,
}

/// Application state shared across handlers.
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    /// Process-wide random source for seed colors and dot placement.
    rng: Mutex<StdRng>,
}

impl AppState {
    /// State with an OS-seeded random source.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// State with a fixed seed, for reproducible output.
    pub fn with_seed(storage: Arc<dyn Storage>, seed: u64) -> Self {
        Self {
            storage,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run `f` with exclusive access to the random source.
    ///
    /// Must not be held across an `.await`.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

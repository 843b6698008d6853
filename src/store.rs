//! In-memory catalog store
//!
//! Owns the canonical rooms, room types and pricing rules. Pricing calls
//! take an `Arc<Catalog>` snapshot; replacing the catalog swaps the `Arc`
//! and never touches snapshots already handed out.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::models::{Catalog, CatalogStats};

/// Shared handle to the canonical catalog
#[derive(Clone)]
pub struct CatalogStore {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogStore {
    /// Create a store holding `catalog`, which must pass validation
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        warn_dangling(&catalog);
        Ok(Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        })
    }

    /// Create a store from a JSON catalog file
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        info!("Loaded catalog from {}: {:?}", path.display(), catalog.stats());
        Self::new(catalog)
    }

    /// Immutable view of the current catalog
    pub async fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&*self.current.read().await)
    }

    /// Validate and atomically swap in a new catalog.
    ///
    /// On validation failure the current catalog is kept.
    pub async fn replace(&self, catalog: Catalog) -> Result<CatalogStats, CatalogError> {
        if let Err(e) = catalog.validate() {
            warn!("Rejected catalog replacement: {}", e);
            return Err(e);
        }
        warn_dangling(&catalog);

        let stats = catalog.stats();
        *self.current.write().await = Arc::new(catalog);
        info!("Catalog replaced. Stats: {:?}", stats);
        Ok(stats)
    }

    pub async fn stats(&self) -> CatalogStats {
        self.current.read().await.stats()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Catalog::seed()))),
        }
    }
}

fn warn_dangling(catalog: &Catalog) {
    for room_id in catalog.dangling_rooms() {
        warn!("Room {} has an unknown room type and cannot be priced", room_id);
    }
}

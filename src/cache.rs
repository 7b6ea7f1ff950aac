use crate::model::Recipe;
use crate::storage::SessionStorage;
use log::{info, warn};
use std::io;
use std::sync::Arc;

/// Default session key under which the result list is stored
pub const DEFAULT_CACHE_KEY: &str = "recipeSearchResults";

/// Single-slot cache holding the records of the most recent search
///
/// Cloning shares the same underlying storage. The search controller is the
/// only component that calls [`ResultCache::write`]; the resolver only reads.
#[derive(Clone)]
pub struct ResultCache {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl ResultCache {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_key(storage, DEFAULT_CACHE_KEY)
    }

    pub fn with_key(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the cached records
    ///
    /// An absent slot, an empty list and a payload that does not parse are
    /// all reported as `None`.
    pub fn read(&self) -> Option<Vec<Recipe>> {
        let raw = self.storage.get(&self.key)?;
        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(records) if records.is_empty() => None,
            Ok(records) => Some(records),
            Err(e) => {
                warn!("Ignoring malformed cached results under '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Replace the cached records as a whole
    pub fn write(&self, records: &[Recipe]) -> io::Result<()> {
        let payload = serde_json::to_string(records)?;
        self.storage.set(&self.key, &payload)?;
        info!("Cached {} search results", records.len());
        Ok(())
    }

    pub fn clear(&self) -> io::Result<()> {
        self.storage.remove(&self.key)?;
        info!("Cleared cached search results");
        Ok(())
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache").field("key", &self.key).finish()
    }
}

// web_app/store.rs - Read-only access to the directory collections
//
// Server functions receive a `SharedStore` explicitly (Leptos context or
// Actix app data) instead of reaching for a global client, so tests can
// hand in a `MemoryDirectory`.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::web_app::error::{DirectoryError, Result};
use crate::web_app::model::{Business, DirectorySeed};
use crate::web_app::query::BusinessQuery;

/// The two reads the directory page relies on
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// All category names, deduplicated and sorted ascending
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Businesses matching every clause of `query`, in `query.order`
    async fn fetch_businesses(&self, query: &BusinessQuery) -> Result<Vec<Business>>;
}

pub type SharedStore = Arc<dyn DirectoryStore>;

/// Store backed by plain vectors; evaluates the predicate tree directly
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    categories: Vec<String>,
    businesses: Vec<Business>,
}

impl MemoryDirectory {
    pub fn new(categories: Vec<String>, businesses: Vec<Business>) -> Self {
        Self { categories, businesses }
    }

    pub fn from_seed(seed: DirectorySeed) -> Self {
        let now = chrono::Utc::now();
        let businesses = seed
            .businesses
            .into_iter()
            .map(|import| import.into_business(now))
            .collect();
        Self::new(seed.categories, businesses)
    }

    /// Load a JSON seed file (`{"categories": [...], "businesses": [...]}`)
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let seed: DirectorySeed = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} businesses and {} categories from {}",
            seed.businesses.len(),
            seed.categories.len(),
            path.display()
        );
        Ok(Self::from_seed(seed))
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectory {
    async fn list_categories(&self) -> Result<Vec<String>> {
        let mut names = self.categories.clone();
        names.sort();
        names.dedup();
        Ok(names)
    }

    async fn fetch_businesses(&self, query: &BusinessQuery) -> Result<Vec<Business>> {
        let mut rows: Vec<Business> = self
            .businesses
            .iter()
            .filter(|b| query.matches(b))
            .cloned()
            .collect();
        query.sort(&mut rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryDirectory::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_missing_seed_file_is_io_error() {
        let err = MemoryDirectory::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DirectoryError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}

//! In-memory blob store.

use std::collections::HashMap;

use super::{BlobStore, StoreError};

/// Blob store backed by a `HashMap`. Contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one blob already present.
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.into(), value.into());
        store
    }

    /// Raw access for inspecting what was written.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! Browser localStorage blob store for WASM builds.

use super::{BlobStore, StoreError};

/// Blob store over `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageBlobStore {
    storage: web_sys::Storage,
}

impl LocalStorageBlobStore {
    pub fn new() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::storage("No window object available"))?;

        let storage = window
            .local_storage()
            .map_err(|e| StoreError::storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| StoreError::storage("localStorage not available"))?;

        Ok(Self { storage })
    }
}

impl BlobStore for LocalStorageBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::storage(format!("Failed to read from localStorage: {:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::storage(format!("Failed to save to localStorage: {:?}", e)))
    }
}

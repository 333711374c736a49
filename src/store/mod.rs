//! Pin persistence.
//!
//! Pins are stored as a single JSON array under a fixed key in a key-value
//! [`BlobStore`]. Backends exist for memory, files (native) and browser
//! localStorage (WASM).

mod error;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;
mod memory;
mod pin_store;

pub use error::StoreError;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileBlobStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageBlobStore;
pub use memory::MemoryBlobStore;
pub use pin_store::PinStore;

/// A string-valued key-value store.
pub trait BlobStore {
    /// Read the blob stored under `key`. `Ok(None)` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<B: BlobStore + ?Sized> BlobStore for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Directory holding pinmap's persisted data on native builds.
///
/// Uses the XDG config directory, falling back to `~/.config`.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_data_dir() -> Option<std::path::PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        Some(config_dir.join("pinmap"))
    } else {
        dirs::home_dir().map(|home_dir| home_dir.join(".config").join("pinmap"))
    }
}

//! Loading and saving the pin list.

use crate::constants::PINS_STORAGE_KEY;
use crate::pin::Pin;

use super::{BlobStore, StoreError};

/// Persists the pin list as a JSON array under one key of a [`BlobStore`].
///
/// Array order is preserved in both directions.
#[derive(Debug, Clone)]
pub struct PinStore<B> {
    backend: B,
    key: String,
}

impl<B: BlobStore> PinStore<B> {
    /// Store pins under the default `"pins"` key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, PINS_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the stored pins.
    ///
    /// A missing, unreadable or malformed blob yields an empty list; the
    /// failure is logged and never propagated.
    pub fn load(&self) -> Vec<Pin> {
        match self.try_load() {
            Ok(pins) => {
                log::info!("Loaded {} pins from '{}'", pins.len(), self.key);
                pins
            }
            Err(e) => {
                log::warn!("Discarding stored pins under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Load the stored pins, reporting why they could not be read.
    pub fn try_load(&self) -> Result<Vec<Pin>, StoreError> {
        match self.backend.get(&self.key)? {
            Some(json) => Ok(decode_pins(&json)?),
            None => {
                log::debug!("No pins stored under '{}'", self.key);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored pins with `pins`.
    pub fn save(&mut self, pins: &[Pin]) -> Result<(), StoreError> {
        let json = encode_pins(pins)?;
        self.backend.set(&self.key, &json)?;
        log::debug!("Saved {} pins to '{}'", pins.len(), self.key);
        Ok(())
    }
}

/// Serialize pins to the persisted JSON array form.
pub fn encode_pins(pins: &[Pin]) -> Result<String, serde_json::Error> {
    serde_json::to_string(pins)
}

/// Parse the persisted JSON array form.
pub fn decode_pins(json: &str) -> Result<Vec<Pin>, serde_json::Error> {
    serde_json::from_str(json)
}

//! pinmap - pan/zoom image viewer core with persistent annotation pins.
//!
//! [`ViewportController`] keeps a [`ViewState`] (offset + uniform scale)
//! valid under drag, wheel, slider and button input, and maps between screen
//! and image coordinates. [`PinBoard`] combines it with a persisted pin list
//! and the context-menu/modal flows a host UI drives.

mod board;
pub mod config;
pub mod constants;
mod event;
pub mod logging;
mod menu;
mod pin;
mod render;
pub mod store;
mod view_state;
mod viewport;

pub use board::{PinBoard, PinModal};
pub use config::{LogLevel, ViewerConfig};
pub use event::{DragGesture, ViewportEvent};
pub use menu::{ContextMenu, MenuAction, MenuItem, MenuTarget};
pub use pin::{Pin, PinDraft, PinEdit, PinEntry, PinId};
pub use render::{PinMarker, PinRenderer};
pub use store::{BlobStore, MemoryBlobStore, PinStore, StoreError};
pub use view_state::{Size, ViewBounds, ViewState};
pub use viewport::{InputSettings, ViewportController, ZoomSlider};

//! Screen placement of pins.
//!
//! Pins are stored in image space. [`PinMarker::project`] runs a pin through
//! the current [`ViewState`] to get where its dot and label go on screen;
//! hosts implement [`PinRenderer`] to draw them.

use crate::pin::{PinEntry, PinId};
use crate::view_state::ViewState;

/// A pin positioned for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PinMarker {
    pub id: PinId,
    /// Screen position of the pin.
    pub x: f32,
    pub y: f32,
    /// Screen position of the label.
    pub label_x: f32,
    pub label_y: f32,
    pub label: String,
    pub color: String,
    /// Link to open on click, if the pin has one.
    pub link: Option<String>,
}

impl PinMarker {
    /// Position `entry` under `view`. The label sits `label_offset` image
    /// units above the pin, so the gap scales with zoom.
    pub fn project(entry: &PinEntry, view: &ViewState, label_offset: f32) -> Self {
        let pin = &entry.pin;
        let (image_x, image_y) = pin.image_position();
        let (x, y) = view.to_screen(image_x, image_y);
        let (label_x, label_y) = view.to_screen(image_x, image_y - label_offset);

        Self {
            id: entry.id,
            x,
            y,
            label_x,
            label_y,
            label: pin.label.clone(),
            color: pin.color.clone(),
            link: pin.link().map(str::to_string),
        }
    }
}

/// Host-side drawing of pin markers.
pub trait PinRenderer {
    /// Create or update the element for `marker.id`.
    fn place(&mut self, marker: &PinMarker);

    /// Remove the element for `id`, if present.
    fn remove(&mut self, id: PinId);
}

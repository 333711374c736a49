//! Pin records and the form data used to create and edit them.

use serde::{Deserialize, Serialize};

/// Session-stable identifier for a pin on the board.
///
/// Ids are handed out when pins enter the board (on load or creation) and
/// are not persisted.
pub type PinId = u32;

/// A persisted pin. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Image-space x coordinate. Stored at full precision so persisted
    /// values are written back unchanged.
    pub x: f64,
    /// Image-space y coordinate.
    pub y: f64,
    pub label: String,
    /// CSS color, typically `#rrggbb` from a color input.
    pub color: String,
    /// Optional URL; empty when unset.
    #[serde(default)]
    pub link: String,
}

impl Pin {
    /// Create a pin without a link.
    pub fn new(x: f64, y: f64, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            color: color.into(),
            link: String::new(),
        }
    }

    /// Set the pin's link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// The link to open when the pin is clicked, if any.
    pub fn link(&self) -> Option<&str> {
        if self.link.is_empty() {
            None
        } else {
            Some(&self.link)
        }
    }

    /// Position in image space at view precision.
    pub fn image_position(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

/// A pin together with its board id.
#[derive(Debug, Clone, PartialEq)]
pub struct PinEntry {
    pub id: PinId,
    pub pin: Pin,
}

/// Contents of the create-pin modal.
#[derive(Debug, Clone, PartialEq)]
pub struct PinDraft {
    pub label: String,
    pub color: String,
    pub link: String,
}

impl PinDraft {
    /// An empty draft with the modal's initial color.
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            color: default_color.into(),
            link: String::new(),
        }
    }

    /// Set the label field.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the color field.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the link field.
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Build the pin at an image-space position. An empty label becomes
    /// `default_label`.
    pub fn into_pin(self, x: f64, y: f64, default_label: &str) -> Pin {
        let label = if self.label.is_empty() {
            default_label.to_string()
        } else {
            self.label
        };

        Pin {
            x,
            y,
            label,
            color: self.color,
            link: self.link,
        }
    }
}

/// Contents of the edit-pin modal, prefilled from an existing pin.
#[derive(Debug, Clone, PartialEq)]
pub struct PinEdit {
    pub label: String,
    pub color: String,
    pub link: String,
}

impl PinEdit {
    /// Prefill the form from `pin`.
    pub fn from_pin(pin: &Pin) -> Self {
        Self {
            label: pin.label.clone(),
            color: pin.color.clone(),
            link: pin.link.clone(),
        }
    }

    /// Write the edit into `pin`. An empty label keeps the current one;
    /// color and link are replaced as given.
    pub fn apply_to(self, pin: &mut Pin) {
        if !self.label.is_empty() {
            pin.label = self.label;
        }
        pin.color = self.color;
        pin.link = self.link;
    }
}

//! Right-click context menu model.
//!
//! The viewer opens a menu where the user right-clicked: on empty map it
//! offers pin creation, on a pin it offers customizing or removing it.

use crate::pin::PinId;
use crate::view_state::Size;

/// What the right-click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Map,
    Pin(PinId),
}

/// Action behind a menu entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// Open the create-pin modal for the clicked screen position.
    CreatePin { x: f32, y: f32 },
    /// Open the edit modal for a pin.
    CustomizePin(PinId),
    RemovePin(PinId),
}

/// A menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
    /// Rendered as a warning (red) button.
    pub destructive: bool,
}

/// An open context menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    /// Where the user clicked, relative to the viewport.
    pub anchor: (f32, f32),
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Build the menu for a right-click at `(x, y)` on `target`.
    pub fn for_target(target: MenuTarget, x: f32, y: f32) -> Self {
        let items = match target {
            MenuTarget::Map => vec![MenuItem {
                label: "Create Pin",
                action: MenuAction::CreatePin { x, y },
                destructive: false,
            }],
            MenuTarget::Pin(id) => vec![
                MenuItem {
                    label: "Customize Pin",
                    action: MenuAction::CustomizePin(id),
                    destructive: false,
                },
                MenuItem {
                    label: "Remove Pin",
                    action: MenuAction::RemovePin(id),
                    destructive: true,
                },
            ],
        };

        Self {
            anchor: (x, y),
            items,
        }
    }

    /// Top-left corner, in window coordinates, for a menu of `menu_size`.
    ///
    /// The anchor is shifted by `viewport_origin` (the viewport's top-left
    /// corner within the window) so the menu opens at the click point. It is
    /// pushed back by `margin` from the right or bottom window edge when it
    /// would overflow.
    pub fn position(
        &self,
        viewport_origin: (f32, f32),
        menu_size: Size,
        window: Size,
        margin: f32,
    ) -> (f32, f32) {
        let mut left = self.anchor.0 + viewport_origin.0;
        let mut top = self.anchor.1 + viewport_origin.1;
        if left + menu_size.width > window.width {
            left = window.width - menu_size.width - margin;
        }
        if top + menu_size.height > window.height {
            top = window.height - menu_size.height - margin;
        }
        (left, top)
    }
}

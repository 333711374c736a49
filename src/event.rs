//! Input events consumed by the viewport controller.
//!
//! Hosts translate their toolkit's events (DOM, winit, ...) into these and
//! feed them to [`crate::ViewportController::handle`]. All coordinates are
//! screen pixels relative to the viewport's top-left corner.

use crate::view_state::Size;

/// An input event affecting the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Pan by a screen-space delta.
    Drag(f32, f32),
    /// Mouse wheel over the viewport; zooms anchored at the cursor.
    Wheel { delta_y: f32, x: f32, y: f32 },
    /// Absolute zoom (slider), anchored at the viewport center.
    ZoomTo(f32),
    /// Relative zoom (buttons), anchored at the viewport center.
    ZoomStep(f32),
    /// Primary button pressed; starts a drag gesture.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved; pans while a drag gesture is active.
    PointerMove { x: f32, y: f32 },
    /// Primary button released.
    PointerUp,
    /// Pointer left the viewport.
    PointerLeave,
    /// Viewport was resized.
    Resize(Size),
}

impl ViewportEvent {
    /// Whether every number carried by the event is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            ViewportEvent::Drag(dx, dy) => dx.is_finite() && dy.is_finite(),
            ViewportEvent::Wheel { delta_y, x, y } => {
                delta_y.is_finite() && x.is_finite() && y.is_finite()
            }
            ViewportEvent::ZoomTo(v) | ViewportEvent::ZoomStep(v) => v.is_finite(),
            ViewportEvent::PointerDown { x, y } | ViewportEvent::PointerMove { x, y } => {
                x.is_finite() && y.is_finite()
            }
            ViewportEvent::PointerUp | ViewportEvent::PointerLeave => true,
            ViewportEvent::Resize(size) => size.width.is_finite() && size.height.is_finite(),
        }
    }
}

/// State of a pointer drag gesture.
///
/// The recorded position only advances when a move is applied, so slow
/// movement accumulates until it crosses the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    active: bool,
    last: (f32, f32),
    moved: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at a pointer-down position.
    pub fn start(&mut self, x: f32, y: f32) {
        self.active = true;
        self.last = (x, y);
        self.moved = false;
    }

    /// Returns the delta to pan by, or `None` if inactive or below threshold.
    pub fn update(&mut self, x: f32, y: f32, threshold: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }

        let dx = x - self.last.0;
        let dy = y - self.last.1;
        if dx.abs() > threshold || dy.abs() > threshold {
            self.last = (x, y);
            self.moved = true;
            Some((dx, dy))
        } else {
            None
        }
    }

    /// Stop dragging (pointer up or leave).
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Whether a pointer is currently held down.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the current (or last) gesture panned at least once.
    /// A gesture that never moved is a click.
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_gesture_ignores_moves() {
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.update(100.0, 100.0, 3.0), None);
    }

    #[test]
    fn test_jitter_below_threshold_is_ignored() {
        let mut gesture = DragGesture::new();
        gesture.start(50.0, 50.0);
        assert_eq!(gesture.update(52.0, 47.0, 3.0), None);
        assert_eq!(gesture.update(53.0, 53.0, 3.0), None);
        assert!(!gesture.has_moved());
    }

    #[test]
    fn test_slow_movement_accumulates() {
        let mut gesture = DragGesture::new();
        gesture.start(0.0, 0.0);
        assert_eq!(gesture.update(2.0, 0.0, 3.0), None);
        assert_eq!(gesture.update(4.0, 0.0, 3.0), Some((4.0, 0.0)));
        assert!(gesture.has_moved());
        // Next delta is measured from the applied position.
        assert_eq!(gesture.update(10.0, 1.0, 3.0), Some((6.0, 1.0)));
    }

    #[test]
    fn test_end_stops_gesture() {
        let mut gesture = DragGesture::new();
        gesture.start(0.0, 0.0);
        gesture.end();
        assert!(!gesture.is_active());
        assert_eq!(gesture.update(100.0, 0.0, 3.0), None);
    }

    #[test]
    fn test_non_finite_events() {
        assert!(ViewportEvent::Drag(1.0, 2.0).is_finite());
        assert!(!ViewportEvent::ZoomTo(f32::NAN).is_finite());
        assert!(
            !ViewportEvent::Wheel {
                delta_y: f32::INFINITY,
                x: 0.0,
                y: 0.0
            }
            .is_finite()
        );
        assert!(ViewportEvent::PointerLeave.is_finite());
    }
}

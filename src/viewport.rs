//! Pan/zoom controller.
//!
//! [`ViewportController`] owns the [`ViewState`] for the session and is the
//! only thing that mutates it. Every pan and zoom ends with
//! [`ViewportController::clamp_bounds`], so the view invariants hold between
//! any two events:
//!
//! - `min_scale <= scale <= max_scale`
//! - on an axis where the content is at least as large as the viewport, the
//!   offset stays within `[viewport - content, 0]` (no empty space revealed)
//! - on an axis where the content is smaller than the viewport, the content
//!   is centered

use crate::config::ViewerConfig;
use crate::event::{DragGesture, ViewportEvent};
use crate::view_state::{Size, ViewBounds, ViewState};

/// Zoom slider model: range, granularity and current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSlider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

/// Tunables for input handling, taken from [`ViewerConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    pub max_scale: f32,
    pub drag_threshold: f32,
    pub wheel_sensitivity: f32,
    pub zoom_step: f32,
    pub slider_step: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

impl From<&ViewerConfig> for InputSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            max_scale: config.max_scale,
            drag_threshold: config.drag_threshold,
            wheel_sensitivity: config.wheel_sensitivity,
            zoom_step: config.zoom_step,
            slider_step: config.slider_step,
        }
    }
}

/// Maintains the view transform under user input.
#[derive(Debug, Clone)]
pub struct ViewportController {
    view: ViewState,
    bounds: ViewBounds,
    gesture: DragGesture,
    slider: ZoomSlider,
    settings: InputSettings,
}

impl ViewportController {
    /// Create a controller showing the whole content, centered.
    pub fn fit(viewport: Size, content: Size) -> Self {
        Self::with_settings(viewport, content, InputSettings::default())
    }

    /// Fit the content using custom input settings.
    pub fn with_settings(viewport: Size, content: Size, settings: InputSettings) -> Self {
        let bounds = ViewBounds::new(viewport, content, settings.max_scale);
        let view = bounds.fit();
        log::debug!(
            "Fit {}x{} content into {}x{} viewport at scale {}",
            bounds.content.width,
            bounds.content.height,
            bounds.viewport.width,
            bounds.viewport.height,
            view.scale
        );

        Self {
            view,
            bounds,
            gesture: DragGesture::new(),
            slider: ZoomSlider {
                min: bounds.min_scale,
                max: bounds.max_scale,
                step: settings.slider_step,
                value: view.scale,
            },
            settings,
        }
    }

    /// Current view transform.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current zoom and offset limits.
    pub fn bounds(&self) -> &ViewBounds {
        &self.bounds
    }

    pub fn slider(&self) -> &ZoomSlider {
        &self.slider
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Whether a pan gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Process one input event. Returns `true` if the view changed.
    ///
    /// Events carrying non-finite numbers are dropped.
    pub fn handle(&mut self, event: ViewportEvent) -> bool {
        if !event.is_finite() {
            log::warn!("Ignoring non-finite viewport event {:?}", event);
            return false;
        }
        log::trace!("Viewport event {:?}", event);

        let before = self.view;
        match event {
            ViewportEvent::Drag(dx, dy) => self.drag_by(dx, dy),
            ViewportEvent::Wheel { delta_y, x, y } => self.wheel(delta_y, x, y),
            ViewportEvent::ZoomTo(value) => self.zoom_centered(value),
            ViewportEvent::ZoomStep(delta) => self.zoom_centered(self.view.scale + delta),
            ViewportEvent::PointerDown { x, y } => self.gesture.start(x, y),
            ViewportEvent::PointerMove { x, y } => {
                if let Some((dx, dy)) = self.gesture.update(x, y, self.settings.drag_threshold) {
                    self.drag_by(dx, dy);
                }
            }
            ViewportEvent::PointerUp | ViewportEvent::PointerLeave => self.gesture.end(),
            ViewportEvent::Resize(size) => self.resize(size),
        }
        self.view != before
    }

    /// Pan by a screen-space delta.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        self.view.offset_x += dx;
        self.view.offset_y += dy;
        self.clamp_bounds();
    }

    /// Zoom to `new_scale` keeping the image point under `(anchor_x, anchor_y)`
    /// fixed on screen. The scale is clamped to the allowed range first.
    pub fn zoom_to(&mut self, new_scale: f32, anchor_x: f32, anchor_y: f32) {
        let old_scale = self.view.scale;
        let new_scale = self.bounds.clamp_scale(new_scale);

        let wx = (anchor_x - self.view.offset_x) / old_scale;
        let wy = (anchor_y - self.view.offset_y) / old_scale;

        self.view.offset_x = anchor_x - wx * new_scale;
        self.view.offset_y = anchor_y - wy * new_scale;
        self.view.scale = new_scale;

        self.clamp_bounds();
        self.slider.value = self.view.scale;
    }

    /// Wheel zoom anchored at the cursor.
    pub fn wheel(&mut self, delta_y: f32, x: f32, y: f32) {
        let target = self.view.scale + delta_y * -self.settings.wheel_sensitivity;
        self.zoom_to(target, x, y);
    }

    /// Zoom anchored at the viewport center (slider and buttons).
    pub fn zoom_centered(&mut self, new_scale: f32) {
        let (cx, cy) = self.bounds.viewport_center();
        self.zoom_to(new_scale, cx, cy);
    }

    /// Zoom in by one button step around the viewport center.
    pub fn zoom_in(&mut self) {
        self.zoom_centered(self.view.scale + self.settings.zoom_step);
    }

    /// Zoom out by one button step around the viewport center.
    pub fn zoom_out(&mut self) {
        self.zoom_centered(self.view.scale - self.settings.zoom_step);
    }

    /// Return to the initial fit view.
    pub fn reset(&mut self) {
        self.view = self.bounds.fit();
        self.slider.value = self.view.scale;
    }

    /// Adopt a new viewport size. The fit scale is recomputed and the current
    /// scale re-clamped into the new range.
    pub fn resize(&mut self, viewport: Size) {
        self.bounds = ViewBounds::new(viewport, self.bounds.content, self.settings.max_scale);
        self.slider.min = self.bounds.min_scale;
        self.slider.max = self.bounds.max_scale;
        log::debug!(
            "Viewport resized to {}x{}, zoom range [{}, {}]",
            self.bounds.viewport.width,
            self.bounds.viewport.height,
            self.bounds.min_scale,
            self.bounds.max_scale
        );
        self.zoom_centered(self.view.scale);
    }

    /// Keep the content covering the viewport, or centered on axes where it
    /// is smaller than the viewport. Centering overrides the clamp.
    pub fn clamp_bounds(&mut self) {
        let scaled = self.bounds.scaled_content(self.view.scale);
        let (min_x, min_y) = self.bounds.min_offset(self.view.scale);

        self.view.offset_x = self.view.offset_x.max(min_x).min(0.0);
        self.view.offset_y = self.view.offset_y.max(min_y).min(0.0);

        if scaled.width < self.bounds.viewport.width {
            self.view.offset_x = (self.bounds.viewport.width - scaled.width) / 2.0;
        }
        if scaled.height < self.bounds.viewport.height {
            self.view.offset_y = (self.bounds.viewport.height - scaled.height) / 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn controller() -> ViewportController {
        ViewportController::fit(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0))
    }

    #[test]
    fn test_fit_scenario() {
        let c = controller();
        assert_eq!(c.view().scale, 0.5);
        assert_eq!(c.view().offset_x, 0.0);
        assert_eq!(c.view().offset_y, 0.0);
        assert_eq!(c.bounds().max_scale, 3.0);
    }

    #[test]
    fn test_fit_slider() {
        let c = controller();
        let slider = c.slider();
        assert_eq!(slider.min, 0.5);
        assert_eq!(slider.max, 3.0);
        assert_eq!(slider.step, 0.01);
        assert_eq!(slider.value, 0.5);
    }

    #[test]
    fn test_drag_at_fit_is_clamped_to_zero() {
        let mut c = controller();
        c.drag_by(-1000.0, 0.0);
        // min_offset_x = 800 - 1600 * 0.5 = 0
        assert_eq!(c.view().offset_x, 0.0);
    }

    #[test]
    fn test_large_drags_stay_in_range() {
        let mut c = controller();
        c.zoom_to(2.0, 400.0, 300.0);
        let (min_x, min_y) = c.bounds().min_offset(2.0);

        for &(dx, dy) in &[(-1e6, -1e6), (1e6, 1e6), (-1e6, 1e6), (12.0, -7.0)] {
            c.drag_by(dx, dy);
            let v = c.view();
            assert!(v.offset_x >= min_x && v.offset_x <= 0.0, "{}", v.offset_x);
            assert!(v.offset_y >= min_y && v.offset_y <= 0.0, "{}", v.offset_y);
        }

        c.drag_by(-1e6, -1e6);
        assert_eq!(c.view().offset_x, min_x);
        assert_eq!(c.view().offset_y, min_y);
    }

    #[test]
    fn test_zoom_is_clamped_to_range() {
        let mut c = controller();
        c.zoom_to(100.0, 10.0, 10.0);
        assert_eq!(c.view().scale, 3.0);
        c.zoom_to(0.0001, 10.0, 10.0);
        assert_eq!(c.view().scale, 0.5);
        c.zoom_to(1.25, 10.0, 10.0);
        assert_eq!(c.view().scale, 1.25);
    }

    #[test]
    fn test_zoom_preserves_anchor() {
        let mut c = controller();
        c.zoom_to(1.5, 400.0, 300.0);

        let anchor = (250.0, 175.0);
        let before = c.view().to_image(anchor.0, anchor.1);
        c.zoom_to(2.25, anchor.0, anchor.1);
        let after = c.view().to_image(anchor.0, anchor.1);

        assert!(approx_eq(before.0, after.0));
        assert!(approx_eq(before.1, after.1));
    }

    #[test]
    fn test_centering_overrides_clamp() {
        // Wide content: fit is limited by width, so height is smaller than viewport.
        let mut c = ViewportController::fit(Size::new(800.0, 600.0), Size::new(1600.0, 400.0));
        let expected_y = (600.0 - 400.0 * 0.5) / 2.0;
        assert_eq!(c.view().offset_y, expected_y);

        c.drag_by(0.0, 500.0);
        assert_eq!(c.view().offset_y, expected_y);

        c.zoom_to(1.0, 100.0, 100.0);
        let scaled_height = 400.0 * c.view().scale;
        assert!(scaled_height < 600.0);
        assert_eq!(c.view().offset_y, (600.0 - scaled_height) / 2.0);
    }

    #[test]
    fn test_wheel_zooms_in_on_negative_delta() {
        let mut c = controller();
        let changed = c.handle(ViewportEvent::Wheel {
            delta_y: -100.0,
            x: 200.0,
            y: 150.0,
        });
        assert!(changed);
        assert!(approx_eq(c.view().scale, 0.65));
        assert!(approx_eq(c.slider().value, 0.65));
    }

    #[test]
    fn test_zoom_step_and_zoom_to_events() {
        let mut c = controller();
        c.handle(ViewportEvent::ZoomStep(0.1));
        assert!(approx_eq(c.view().scale, 0.6));
        c.handle(ViewportEvent::ZoomStep(-0.1));
        c.handle(ViewportEvent::ZoomStep(-0.1));
        assert_eq!(c.view().scale, 0.5);
        c.handle(ViewportEvent::ZoomTo(2.0));
        assert_eq!(c.view().scale, 2.0);
        assert_eq!(c.slider().value, 2.0);
    }

    #[test]
    fn test_zoom_buttons() {
        let mut c = controller();
        c.zoom_in();
        c.zoom_in();
        assert!(approx_eq(c.view().scale, 0.7));
        c.zoom_out();
        assert!(approx_eq(c.view().scale, 0.6));
    }

    #[test]
    fn test_centered_zoom_keeps_center() {
        let mut c = controller();
        c.zoom_to(1.0, 400.0, 300.0);
        let before = c.view().to_image(400.0, 300.0);
        c.handle(ViewportEvent::ZoomTo(2.0));
        let after = c.view().to_image(400.0, 300.0);
        assert!(approx_eq(before.0, after.0));
        assert!(approx_eq(before.1, after.1));
    }

    #[test]
    fn test_pointer_gesture_pans() {
        let mut c = controller();
        c.zoom_to(1.0, 400.0, 300.0);
        let start = *c.view();

        c.handle(ViewportEvent::PointerDown { x: 100.0, y: 100.0 });
        assert!(c.is_dragging());
        assert!(!c.handle(ViewportEvent::PointerMove { x: 102.0, y: 101.0 }));
        assert!(c.handle(ViewportEvent::PointerMove { x: 150.0, y: 120.0 }));
        assert_eq!(c.view().offset_x, start.offset_x + 50.0);
        assert_eq!(c.view().offset_y, start.offset_y + 20.0);

        c.handle(ViewportEvent::PointerLeave);
        assert!(!c.is_dragging());
        assert!(!c.handle(ViewportEvent::PointerMove { x: 300.0, y: 300.0 }));
    }

    #[test]
    fn test_click_without_movement_does_not_pan() {
        let mut c = controller();
        c.zoom_to(1.0, 400.0, 300.0);
        let start = *c.view();
        c.handle(ViewportEvent::PointerDown { x: 10.0, y: 10.0 });
        c.handle(ViewportEvent::PointerUp);
        assert_eq!(*c.view(), start);
        assert!(!c.gesture().has_moved());
    }

    #[test]
    fn test_non_finite_events_are_ignored() {
        let mut c = controller();
        let before = *c.view();
        assert!(!c.handle(ViewportEvent::ZoomTo(f32::NAN)));
        assert!(!c.handle(ViewportEvent::Drag(f32::INFINITY, 0.0)));
        assert_eq!(*c.view(), before);
    }

    #[test]
    fn test_resize_recomputes_range() {
        let mut c = controller();
        c.zoom_to(0.6, 400.0, 300.0);
        c.handle(ViewportEvent::Resize(Size::new(1600.0, 1200.0)));
        assert_eq!(c.bounds().min_scale, 1.0);
        assert_eq!(c.view().scale, 1.0);
        assert_eq!(c.slider().min, 1.0);
        assert_eq!(c.view().offset_x, 0.0);
        assert_eq!(c.view().offset_y, 0.0);
    }

    #[test]
    fn test_reset() {
        let mut c = controller();
        c.zoom_to(2.5, 100.0, 100.0);
        c.reset();
        assert_eq!(*c.view(), c.bounds().fit());
        assert_eq!(c.slider().value, 0.5);
    }
}

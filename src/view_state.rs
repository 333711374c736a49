//! View transform and bounds.
//!
//! [`ViewState`] is the affine map from image space to screen space
//! (uniform scale, then translation). [`ViewBounds`] carries the limits the
//! controller enforces on it: the zoom range and the offset range derived
//! from viewport and content size.

use std::path::Path;

/// Width and height of a viewport or of the displayed content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a size from width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replace zero, negative or non-finite dimensions with 1.0.
    ///
    /// The fit scale divides by content size and multiplies by viewport size,
    /// so both must be strictly positive for `scale > 0` to hold.
    pub fn sanitized(self) -> Self {
        fn dim(v: f32) -> f32 {
            if v.is_finite() && v > 0.0 { v } else { 1.0 }
        }
        Self::new(dim(self.width), dim(self.height))
    }

    /// Read the pixel dimensions of an image file without decoding it.
    pub fn from_image_file(path: impl AsRef<Path>) -> image::ImageResult<Self> {
        let (width, height) = image::image_dimensions(path.as_ref())?;
        log::debug!(
            "Content size of {:?}: {}x{}",
            path.as_ref(),
            width,
            height
        );
        Ok(Self::new(width as f32, height as f32))
    }
}

/// Current pan/zoom transform.
///
/// `offset_x`/`offset_y` is where the content's top-left corner lands on
/// screen; `scale` is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl ViewState {
    /// Create a view from an offset and a scale.
    pub fn new(offset_x: f32, offset_y: f32, scale: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            scale,
        }
    }

    /// Identity transform (scale 1, no offset).
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Map an image-space point to screen space.
    pub fn to_screen(&self, image_x: f32, image_y: f32) -> (f32, f32) {
        (
            self.offset_x + image_x * self.scale,
            self.offset_y + image_y * self.scale,
        )
    }

    /// Map a screen-space point to image space. Inverse of [`Self::to_screen`].
    pub fn to_image(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.offset_x) / self.scale,
            (screen_y - self.offset_y) / self.scale,
        )
    }

    /// CSS `transform` value for the element holding the content and pins.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Limits applied to a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub viewport: Size,
    pub content: Size,
    /// Scale at which the whole content fits the viewport.
    pub min_scale: f32,
    pub max_scale: f32,
}

impl ViewBounds {
    /// Compute bounds for a viewport/content pair. `min_scale` is the fit
    /// scale; `max_scale` is raised to `min_scale` if it would be lower.
    pub fn new(viewport: Size, content: Size, max_scale: f32) -> Self {
        let viewport = viewport.sanitized();
        let content = content.sanitized();
        let min_scale = (viewport.width / content.width).min(viewport.height / content.height);
        let max_scale = if max_scale.is_finite() {
            max_scale.max(min_scale)
        } else {
            min_scale
        };

        Self {
            viewport,
            content,
            min_scale,
            max_scale,
        }
    }

    /// Clamp `scale` into `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.min_scale).min(self.max_scale)
    }

    /// Size of the content on screen at `scale`.
    pub fn scaled_content(&self, scale: f32) -> Size {
        Size::new(self.content.width * scale, self.content.height * scale)
    }

    /// Lowest allowed offsets at `scale`. The highest allowed offset is 0
    /// on both axes.
    pub fn min_offset(&self, scale: f32) -> (f32, f32) {
        let scaled = self.scaled_content(scale);
        (
            self.viewport.width - scaled.width,
            self.viewport.height - scaled.height,
        )
    }

    /// Offsets that center the content at `scale`.
    pub fn centered_offset(&self, scale: f32) -> (f32, f32) {
        let (min_x, min_y) = self.min_offset(scale);
        (min_x / 2.0, min_y / 2.0)
    }

    /// Center of the viewport in screen space.
    pub fn viewport_center(&self) -> (f32, f32) {
        (self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// The view that shows the whole content, centered.
    pub fn fit(&self) -> ViewState {
        let (offset_x, offset_y) = self.centered_offset(self.min_scale);
        ViewState::new(offset_x, offset_y, self.min_scale)
    }
}

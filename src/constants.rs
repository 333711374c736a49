//! Global constants for the pinmap viewer

/// Upper bound of the zoom range.
pub const MAX_SCALE: f32 = 3.0;

/// Pointer movement (in screen pixels, per axis) below which a drag is ignored.
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Scale change per unit of wheel `delta_y`. Negative deltas zoom in.
pub const WHEEL_SENSITIVITY: f32 = 0.0015;

/// Scale increment applied by the zoom-in / zoom-out buttons.
pub const ZOOM_STEP: f32 = 0.1;

/// Granularity of the zoom slider.
pub const SLIDER_STEP: f32 = 0.01;

/// Key under which the pin list is persisted.
pub const PINS_STORAGE_KEY: &str = "pins";

/// Label given to pins created with an empty label.
pub const DEFAULT_PIN_LABEL: &str = "Pin";

/// Initial value of the color field in the create-pin modal.
pub const DEFAULT_PIN_COLOR: &str = "#0084ff";

/// Distance (image units) between a pin and its label above it.
pub const LABEL_OFFSET: f32 = 20.0;

/// Gap kept between a context menu and the window edge when it is pushed back.
pub const MENU_EDGE_MARGIN: f32 = 10.0;

/// Screen distance (px) within which a click hits a pin.
pub const PIN_HIT_RADIUS: f32 = 10.0;

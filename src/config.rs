//! Viewer configuration.
//!
//! Settings are stored as JSON, next to the pin data: in the user's config
//! directory on native builds, in localStorage on WASM.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Viewer configuration. Every field except `version` falls back to its
/// default when absent from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Upper bound of the zoom range
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,

    /// Per-axis pointer movement (px) that must be exceeded to pan
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,

    /// Scale change per unit of wheel delta
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f32,

    /// Scale increment of the zoom buttons
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,

    /// Zoom slider granularity
    #[serde(default = "default_slider_step")]
    pub slider_step: f32,

    /// Blob key the pin list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Label for pins created without one
    #[serde(default = "default_pin_label")]
    pub default_pin_label: String,

    /// Initial color in the create-pin modal
    #[serde(default = "default_pin_color")]
    pub default_pin_color: String,

    /// Distance (image units) from a pin up to its label
    #[serde(default = "default_label_offset")]
    pub label_offset: f32,

    /// Margin kept between a pushed-back context menu and the window edge
    #[serde(default = "default_menu_edge_margin")]
    pub menu_edge_margin: f32,

    /// Screen distance (px) within which a right-click targets a pin
    #[serde(default = "default_pin_hit_radius")]
    pub pin_hit_radius: f32,
}

fn default_max_scale() -> f32 {
    constants::MAX_SCALE
}

fn default_drag_threshold() -> f32 {
    constants::DRAG_THRESHOLD
}

fn default_wheel_sensitivity() -> f32 {
    constants::WHEEL_SENSITIVITY
}

fn default_zoom_step() -> f32 {
    constants::ZOOM_STEP
}

fn default_slider_step() -> f32 {
    constants::SLIDER_STEP
}

fn default_storage_key() -> String {
    constants::PINS_STORAGE_KEY.to_string()
}

fn default_pin_label() -> String {
    constants::DEFAULT_PIN_LABEL.to_string()
}

fn default_pin_color() -> String {
    constants::DEFAULT_PIN_COLOR.to_string()
}

fn default_label_offset() -> f32 {
    constants::LABEL_OFFSET
}

fn default_menu_edge_margin() -> f32 {
    constants::MENU_EDGE_MARGIN
}

fn default_pin_hit_radius() -> f32 {
    constants::PIN_HIT_RADIUS
}

impl ViewerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            max_scale: default_max_scale(),
            drag_threshold: default_drag_threshold(),
            wheel_sensitivity: default_wheel_sensitivity(),
            zoom_step: default_zoom_step(),
            slider_step: default_slider_step(),
            storage_key: default_storage_key(),
            default_pin_label: default_pin_label(),
            default_pin_color: default_pin_color(),
            label_offset: default_label_offset(),
            menu_edge_margin: default_menu_edge_margin(),
            pin_hit_radius: default_pin_hit_radius(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "pinmap-config.json"
    }

    /// Load from the platform's default location, falling back to defaults
    /// when nothing usable is stored there.
    pub fn load_or_default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let loaded = Self::load_from_default_path();
        #[cfg(target_arch = "wasm32")]
        let loaded = Self::load_from_local_storage();

        loaded.unwrap_or_default()
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        crate::store::default_data_dir().map(|dir| dir.join(Self::default_filename()))
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        Self::load_from_path(&path)
    }

    /// Try to load configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to a file, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// LocalStorage key for WASM config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "pinmap-config";

    /// Try to load configuration from localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

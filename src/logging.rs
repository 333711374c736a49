//! Logger setup for native and WASM hosts.

use crate::config::LogLevel;

/// Install the global logger at `level`.
///
/// Uses `env_logger` on native builds (so `RUST_LOG` still overrides
/// per-module filters) and `console_log` in the browser. Calling this more
/// than once is harmless; later calls only log a debug message.
pub fn init(level: LogLevel) {
    #[cfg(not(target_arch = "wasm32"))]
    let result = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
        .map_err(|e| e.to_string());

    #[cfg(target_arch = "wasm32")]
    let result = console_log::init_with_level(level.to_level()).map_err(|e| e.to_string());

    match result {
        Ok(()) => log::info!("Logging initialized at {:?}", level),
        Err(e) => log::debug!("Logger already initialized: {}", e),
    }
}

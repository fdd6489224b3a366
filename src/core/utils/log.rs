//! Engine Logging
//!
//! - wasm32: browser console through web-sys (same channel as `init()`)
//! - native: stderr, so test runs capture it per test
//!
//! Usage:
//! ```rust
//! use kessler_engine::{engine_log, engine_warn};
//!
//! let seeded = 900;
//! engine_log!("seeded {} debris", seeded);
//! engine_warn!("capacity reached");
//! ```
//!
//! Never call these from the per-particle passes; they allocate.

#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(msg: &str) {
    eprintln!("[kessler] {msg}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(msg: &str) {
    eprintln!("[kessler] WARN {msg}");
}

/// Informational engine event (lifecycle, cascades)
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::console_log(&format!($($arg)*))
    };
}

/// Recoverable oddity the caller may want to know about (clamped input etc.)
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::console_warn(&format!($($arg)*))
    };
}

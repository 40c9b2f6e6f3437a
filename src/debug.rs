//! Debug logging utilities
//!
//! Provides debug logging that only activates in debug builds.
//! In release builds, all debug_log! calls are no-ops.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

static DEBUG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Initialize debug logging (only in debug builds)
#[cfg(debug_assertions)]
pub fn init() {
    let mut file_guard = DEBUG_FILE.lock().unwrap();
    if file_guard.is_none() {
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("quizhive-debug.log")
        {
            *file_guard = Some(file);
            drop(file_guard);
            log("=== Debug session started ===");
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}

/// Log a message to quizhive-debug.log (only in debug builds)
#[cfg(debug_assertions)]
pub fn log(message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, message);

    if let Ok(mut file_guard) = DEBUG_FILE.lock() {
        if let Some(ref mut file) = *file_guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn log(_message: &str) {}

/// Macro for convenient debug logging
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug::log(&format!($($arg)*))
    };
}

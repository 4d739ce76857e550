//! Console diagnostics.
//!
//! Failures are logged, never shown as banners.

use gloo::console;

use crate::core::error::ApiError;
use crate::core::sync::Operation;

/// Log a failed flow stage with its operation name.
pub(crate) fn report(operation: Operation, error: &ApiError) {
    console::error!(format!("Error during {operation}: {error}"));
}

/// Log a rejected user input or push frame.
pub(crate) fn reject(context: &str, error: &dyn std::error::Error) {
    console::warn!(format!("{context}: {error}"));
}

/// Lifecycle message.
pub(crate) fn note(message: &str) {
    console::log!(message);
}

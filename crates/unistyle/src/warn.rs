//! One-time diagnostics.
//!
//! A bad declaration degrades to an omitted property, and says so exactly
//! once per process per message: repeated resolve calls over the same bad
//! style list would otherwise flood the log every frame.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

static SEEN: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// True the first time this exact message is seen.
pub(crate) fn first_time(message: &str) -> bool {
    let mut seen = SEEN.lock().unwrap_or_else(|e| e.into_inner());
    seen.insert(message.to_string())
}

/// Logs a warning once per distinct message.
pub(crate) fn warn_once(message: String) {
    if first_time(&message) {
        log::warn!("{message}");
    }
}

/// Logs an error once per distinct message.
pub(crate) fn error_once(message: String) {
    if first_time(&message) {
        log::error!("{message}");
    }
}

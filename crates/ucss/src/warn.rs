//! One-time parse diagnostics.
//!
//! Inline style objects re-compile on every resolve call, so a parse
//! warning that fired unconditionally would repeat every frame.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

static SEEN: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Logs a warning once per distinct message.
pub(crate) fn warn_once(message: String) {
    let mut seen = SEEN.lock().unwrap_or_else(|e| e.into_inner());
    if seen.insert(message.clone()) {
        log::warn!("{message}");
    }
}

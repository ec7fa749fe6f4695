//! Deduplicated warnings with colored terminal output.
//!
//! Callers never fail on input they can still handle, but they report it
//! here. Each distinct message is printed once per process.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about accepted-but-unusual input (prints once per unique message)
///
/// # Example
/// ```
/// use selkit_common::warning::{has_warned, warn_once};
///
/// warn_once("CLI", "unusual combinator '||'");
/// assert!(has_warned("CLI", "unusual combinator '||'"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
    }
}

/// Whether a warning with this component and message has been printed.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("test", "dedupe me");
        warn_once("test", "dedupe me");
        assert!(has_warned("test", "dedupe me"));
    }

    #[test]
    fn test_components_are_distinct_keys() {
        warn_once("a", "same message");
        assert!(has_warned("a", "same message"));
        assert!(!has_warned("b", "same message"));
    }

    #[test]
    fn test_unknown_message_not_warned() {
        assert!(!has_warned("test", "never printed"));
    }
}

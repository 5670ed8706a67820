//! Keyboard shortcut decoding.
//!
//! Kept free of `web_sys` types so the mapping is testable natively; the
//! window listener in `app` feeds it the raw key state.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Global page shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + K
    FocusInput,
    /// Ctrl/Cmd + D
    ToggleTheme,
}

/// Map a keydown to a global shortcut, if any.
#[must_use]
pub fn shortcut_for(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    if !(ctrl || meta) {
        return None;
    }
    match key {
        "k" => Some(Shortcut::FocusInput),
        "d" => Some(Shortcut::ToggleTheme),
        _ => None,
    }
}

/// Enter submits; Shift+Enter does not.
#[must_use]
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

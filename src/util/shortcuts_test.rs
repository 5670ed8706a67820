use super::*;

#[test]
fn ctrl_or_meta_k_focuses_input() {
    assert_eq!(shortcut_for("k", true, false), Some(Shortcut::FocusInput));
    assert_eq!(shortcut_for("k", false, true), Some(Shortcut::FocusInput));
}

#[test]
fn ctrl_or_meta_d_toggles_theme() {
    assert_eq!(shortcut_for("d", true, false), Some(Shortcut::ToggleTheme));
    assert_eq!(shortcut_for("d", false, true), Some(Shortcut::ToggleTheme));
}

#[test]
fn bare_keys_are_not_shortcuts() {
    assert_eq!(shortcut_for("k", false, false), None);
    assert_eq!(shortcut_for("d", false, false), None);
}

#[test]
fn other_modified_keys_are_ignored() {
    assert_eq!(shortcut_for("x", true, false), None);
    assert_eq!(shortcut_for("K", true, false), None);
}

#[test]
fn enter_submits_unless_shifted() {
    assert!(is_submit_key("Enter", false));
    assert!(!is_submit_key("Enter", true));
    assert!(!is_submit_key("a", false));
}

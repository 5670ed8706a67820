use super::*;

#[test]
fn theme_string_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn get_theme_is_light_off_browser() {
    assert_eq!(get_theme(), Theme::Light);
}

#[test]
fn toggle_returns_next_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_and_set_are_callable() {
    apply(Theme::Dark);
    set_theme(Theme::Light);
}

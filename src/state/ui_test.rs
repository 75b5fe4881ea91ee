use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn theme_toggles_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_storage_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_storage_value(theme.storage_value()), Some(theme));
    }
}

#[test]
fn theme_unknown_storage_value_is_none() {
    assert_eq!(Theme::from_storage_value("sepia"), None);
    assert_eq!(Theme::from_storage_value(""), None);
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menus_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert!(!state.account_menu_open);
    assert_eq!(state.theme, Theme::Light);
}

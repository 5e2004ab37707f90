use laba_types::{DARK_THEME, DEFAULT_SELECTED_KEY, IconRef, LIGHT_THEME, MENU_ITEMS, ShellState, ThemeTokens};

#[test]
fn initial_state_is_expanded_and_light() {
    let state = ShellState::new();
    assert!(!state.collapsed, "sider should start expanded");
    assert!(!state.is_dark_mode, "shell should start light");
    assert_eq!(*state.theme_tokens(), LIGHT_THEME);
    assert_eq!(state.theme_tokens().background_color.to_string(), "#FFFFFF");
    assert_eq!(state.theme_tokens().text_color.to_string(), "#000000");
}

#[test]
fn theme_toggle_follows_the_switch_value() {
    let mut state = ShellState::new();
    state.toggle_theme(true);
    assert_eq!(*state.theme_tokens(), DARK_THEME);
    assert_eq!(state.theme_tokens().background_color.to_string(), "#002140");
    assert_eq!(state.theme_tokens().text_color.to_string(), "rgba(255,255,255,0.65)");

    // setting the same value again is not a toggle
    state.toggle_theme(true);
    assert!(state.is_dark_mode);

    state.toggle_theme(false);
    assert_eq!(state, ShellState::new());
}

#[test]
fn collapse_and_theme_are_independent() {
    let mut state = ShellState::new();
    state.toggle_collapse();
    state.toggle_theme(true);
    assert!(state.collapsed && state.is_dark_mode);
    state.toggle_collapse();
    assert!(!state.collapsed);
    assert!(state.is_dark_mode, "collapsing must not touch the theme");
}

#[test]
fn menu_table_matches_the_dashboard_layout() {
    let labels: Vec<_> = MENU_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(labels, ["Option 1", "Option 2", "User", "Team", "Files"]);

    let icons: Vec<_> = MENU_ITEMS.iter().map(|item| item.icon).collect();
    assert_eq!(
        icons,
        [
            Some(IconRef::PieChart),
            Some(IconRef::Desktop),
            Some(IconRef::User),
            Some(IconRef::Team),
            Some(IconRef::File),
        ]
    );

    let child_counts: Vec<_> = MENU_ITEMS.iter().map(|item| item.children.len()).collect();
    assert_eq!(child_counts, [0, 0, 3, 2, 0]);
    assert_eq!(MENU_ITEMS[0].key, DEFAULT_SELECTED_KEY);
}

#[test]
fn dark_text_flattens_over_its_background() {
    assert_eq!(DARK_THEME.text_rgb(), (166, 177, 188));
    assert_eq!(LIGHT_THEME.text_rgb(), (0, 0, 0));
    assert_eq!(ThemeTokens::select(true).background_rgb(), (0x00, 0x21, 0x40));
}

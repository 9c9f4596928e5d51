//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    GoHome,
    GoAbout,
    GoContact,
    NextScreen,
    // Disclosures
    ToggleNavMenu,
    ToggleThemeMenu,
    // Listing
    Up,
    Down,
    Retry,
    LoadMore,
    // Session
    Quit,
}

/// Key mapping for browsing screens (Home and About)
///
/// The Contact screen routes printable keys into the form instead and
/// only honors the modifier mappings below.
pub fn browse_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('1') => Some(Action::GoHome),
        KeyCode::Char('2') => Some(Action::GoAbout),
        KeyCode::Char('3') => Some(Action::GoContact),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::Char('m') => Some(Action::ToggleNavMenu),
        KeyCode::Char('t') => Some(Action::ToggleThemeMenu),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('r') => Some(Action::Retry),
        KeyCode::Char('l') => Some(Action::LoadMore),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping that applies on every screen, including while editing
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('t') => Some(Action::ToggleThemeMenu),
            KeyCode::Char('n') => Some(Action::ToggleNavMenu),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    } else {
        None
    }
}

/// Actions available while a dropdown menu is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    HighlightUp,
    HighlightDown,
    Select,
    Dismiss,
}

/// Key mapping while the theme picker dropdown is open
pub fn menu_key_to_action(key: KeyCode) -> Option<MenuAction> {
    match key {
        KeyCode::Char('k') | KeyCode::Up => Some(MenuAction::HighlightUp),
        KeyCode::Char('j') | KeyCode::Down => Some(MenuAction::HighlightDown),
        KeyCode::Enter => Some(MenuAction::Select),
        KeyCode::Esc | KeyCode::Char('t') => Some(MenuAction::Dismiss),
        _ => None,
    }
}

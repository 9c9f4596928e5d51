//! UI rendering components
//!
//! Every draw function receives the active token set and looks values
//! up by semantic role. Structure branches on `layout.kind`, finer
//! visual treatment on `variant`; nothing branches on raw theme ids.

pub mod about;
pub mod button;
pub mod card;
pub mod chrome;
pub mod contact;
pub mod header;
pub mod home;
pub mod overlay;

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Block,
};

use crate::app::state::{AppState, Screen};
use crate::theme::{Theme, ThemeStore, Variant};

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, store: &ThemeStore) {
    let theme = store.tokens();

    // Recoverable boundary: the error screen replaces everything
    if let Some(message) = state.runtime_error.clone() {
        overlay::draw_error_screen(frame, &message, theme);
        return;
    }

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.colors.background)), area);

    let zones = chrome::split(area, theme);

    match state.screen {
        Screen::Home => home::draw(frame, zones.content, state, theme),
        Screen::About => about::draw(frame, zones.content, theme),
        Screen::Contact => contact::draw(frame, zones.content, state, theme),
    }

    // Header last so its popups layer over the content
    header::draw(frame, &zones, state, store);

    if store.is_transitioning() {
        overlay::draw_transition(frame, theme, state.tick_count);
    }
}

/// Build a heading line in the theme's voice
///
/// The casing and coloring of headings is the one place the named
/// variant hooks fan out for text, so per-theme divergence stays
/// centrally auditable.
pub fn heading(text: &str, theme: &Theme) -> Line<'static> {
    let bold = Style::default().fg(theme.colors.text).add_modifier(theme.typography.weights.bold);

    match theme.variant {
        Variant::Solid => Line::from(Span::styled(text.to_string(), bold)),
        Variant::Sharp => Line::from(Span::styled(text.to_uppercase(), bold)),
        Variant::Vibrant => {
            // Two-tone split across the primary and secondary roles
            let mid = text.len() / 2;
            let split = text
                .char_indices()
                .map(|(i, _)| i)
                .min_by_key(|i| i.abs_diff(mid))
                .unwrap_or(0);
            let (head, tail) = text.split_at(split);
            Line::from(vec![
                Span::styled(
                    head.to_string(),
                    Style::default()
                        .fg(theme.colors.primary)
                        .add_modifier(theme.typography.weights.bold),
                ),
                Span::styled(
                    tail.to_string(),
                    Style::default()
                        .fg(theme.colors.secondary)
                        .add_modifier(theme.typography.weights.bold),
                ),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MINIMALIST, NOIR, VERDANT};

    #[test]
    fn sharp_headings_are_uppercased() {
        let line = heading("Featured Products", &NOIR);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "FEATURED PRODUCTS");
    }

    #[test]
    fn solid_headings_keep_their_casing() {
        let line = heading("Featured Products", &MINIMALIST);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Featured Products");
    }

    #[test]
    fn vibrant_headings_split_into_two_tones() {
        let line = heading("Featured", &VERDANT);
        assert_eq!(line.spans.len(), 2);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Featured");
    }
}

//! Full-screen overlays: theme transition and the recoverable error view

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{Easing, Theme};

/// Spinner frame for the current tick, timed by the animation tokens
///
/// Each easing style has its own glyph set; one full cycle spans one
/// animation duration at the 16 ms frame cadence.
pub fn spinner_glyph(theme: &Theme, tick: u64) -> &'static str {
    let frames: &'static [&'static str] = match theme.animation.easing {
        Easing::Linear => &["|", "/", "-", "\\"],
        Easing::EaseOut => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        Easing::Spring => &["◐", "◓", "◑", "◒"],
    };

    let cycle_ticks = (theme.animation.duration.as_millis() as u64 / 16).max(frames.len() as u64);
    let ticks_per_frame = (cycle_ticks / frames.len() as u64).max(1);
    frames[((tick / ticks_per_frame) % frames.len() as u64) as usize]
}

/// Draw the transition overlay shown while a selection is in flight
pub fn draw_transition(frame: &mut Frame, theme: &Theme, tick: u64) {
    let area = frame.area();
    let width = area.width.min(36);
    let height = area.height.min(5);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.primary))
        .style(Style::default().bg(theme.colors.surface));
    let inner = block.inner(panel);

    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(spinner_glyph(theme, tick), Style::default().fg(theme.colors.primary)),
            Span::styled(" Switching theme…", Style::default().fg(theme.colors.text)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Draw the recoverable full-screen error view
///
/// Recovering resets the boundary only; the theme selection and the
/// rest of the session survive untouched.
pub fn draw_error_screen(frame: &mut Frame, message: &str, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.colors.background)),
        area,
    );

    let width = area.width.min(64);
    let height = area.height.min(9);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.secondary))
        .style(Style::default().bg(theme.colors.surface));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            "Oops! Something went wrong",
            Style::default()
                .fg(theme.colors.text)
                .add_modifier(theme.typography.weights.bold),
        )),
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.colors.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press r to try again · q to quit",
            Style::default().fg(theme.colors.primary),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MINIMALIST, NOIR, VERDANT};

    #[test]
    fn spinner_cycles_through_its_frames() {
        let mut seen = std::collections::HashSet::new();
        for tick in 0..64 {
            seen.insert(spinner_glyph(&MINIMALIST, tick));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn easing_selects_the_glyph_set() {
        assert_eq!(spinner_glyph(&MINIMALIST, 0), "|");
        assert_eq!(spinner_glyph(&NOIR, 0), "⠋");
        assert_eq!(spinner_glyph(&VERDANT, 0), "◐");
    }

    #[test]
    fn spinner_is_stable_within_a_frame_window() {
        // 200 ms over 4 glyphs at the 16 ms cadence: 3 ticks per frame
        assert_eq!(spinner_glyph(&MINIMALIST, 0), spinner_glyph(&MINIMALIST, 2));
        assert_ne!(spinner_glyph(&MINIMALIST, 0), spinner_glyph(&MINIMALIST, 3));
    }
}

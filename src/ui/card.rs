//! Product card widget

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::catalog::Product;
use crate::theme::Theme;
use crate::ui::button;

/// Rows a card occupies in the grid, borders included
pub const CARD_HEIGHT: u16 = 7;

/// Draw one product card
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    product: &Product,
    selected: bool,
    theme: &Theme,
    tick: u64,
) {
    let border_color = if selected {
        // Selection highlight pulses on the animation cadence
        if button::highlight_phase(tick, theme.animation.duration) {
            theme.colors.primary
        } else {
            theme.colors.accent
        }
    } else {
        theme.colors.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.colors.card));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 8 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let weights = theme.typography.weights;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            truncate(&product.title, width),
            Style::default().fg(theme.colors.text).add_modifier(weights.medium),
        )),
        Line::from(Span::styled(
            truncate(&product.category, width),
            Style::default().fg(theme.colors.text_secondary).add_modifier(weights.light),
        )),
        Line::from(vec![
            Span::styled(product.rating.stars(), Style::default().fg(theme.colors.accent)),
            Span::styled(
                format!(" ({})", product.rating.count),
                Style::default().fg(theme.colors.text_secondary),
            ),
        ]),
        Line::from(Span::styled(
            product.price_label(),
            Style::default().fg(theme.colors.primary).add_modifier(weights.bold),
        )),
    ];

    // Fill the remaining rows with the wrapped description
    let remaining = (inner.height as usize).saturating_sub(lines.len());
    for wrapped in textwrap::wrap(&product.description, width).into_iter().take(remaining) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(theme.colors.text_secondary).add_modifier(weights.light),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Truncate to `width` characters with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Backpack", 20), "Backpack");
    }

    #[test]
    fn truncate_marks_the_cut() {
        let out = truncate("A very long product title indeed", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let out = truncate("émily's café supplies étc", 10);
        assert_eq!(out.chars().count(), 10);
    }
}

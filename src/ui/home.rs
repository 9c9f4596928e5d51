//! Home view: hero section and the featured product grid

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{AppState, CatalogState};
use crate::theme::{LayoutKind, Theme};
use crate::ui::button::{self, ButtonSize, ButtonVariant};
use crate::ui::{card, heading, overlay};

/// Draw the home view for the current catalog lifecycle state
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    if let CatalogState::Failed(message) = &state.catalog {
        let message = message.clone();
        draw_error(frame, area, &message, theme);
        return;
    }
    if matches!(state.catalog, CatalogState::Loading) {
        draw_loading(frame, area, theme, state.tick_count);
        return;
    }
    draw_listing(frame, area, state, theme);
}

/// Columns in the product grid for a layout kind at a given width
pub fn grid_columns(kind: LayoutKind, width: u16) -> u16 {
    if width < 60 {
        return 1;
    }
    match kind {
        LayoutKind::Grid => 3,
        LayoutKind::Minimalist | LayoutKind::Sidebar { .. } => 2,
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, theme: &Theme, tick: u64) {
    let line = Line::from(vec![
        Span::styled(overlay::spinner_glyph(theme, tick), Style::default().fg(theme.colors.primary)),
        Span::styled(
            " Loading amazing products...",
            Style::default().fg(theme.colors.text_secondary),
        ),
    ]);

    let centered = Rect { y: area.y + area.height / 2, height: 1.min(area.height), ..area };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), centered);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let width = area.width.min(56);
    let height = area.height.min(8);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.border))
        .style(Style::default().bg(theme.colors.surface));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        heading("Oops! Something went wrong", theme),
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.colors.text_secondary),
        )),
        Line::default(),
        button::line("Try Again (r)", ButtonVariant::Outline, ButtonSize::Medium, theme),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        inner,
    );
}

fn hero_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Vertical prominence of the title comes from the size scale
    for _ in 0..(theme.typography.sizes.xlarge.saturating_sub(1)) / 2 {
        lines.push(Line::default());
    }
    lines.push(heading("Welcome to Vitrine", theme));
    for _ in 0..theme.typography.line_heights.normal {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Discover products that reshape themselves around three design voices.",
        Style::default()
            .fg(theme.colors.text_secondary)
            .add_modifier(theme.typography.weights.light),
    )));
    lines.push(Line::default());

    let gap = " ".repeat(theme.spacing.sm as usize);
    let mut cta = button::line("Shop Now", ButtonVariant::Primary, ButtonSize::Large, theme);
    cta.spans.push(Span::raw(gap));
    cta.spans.extend(
        button::line("Learn More", ButtonVariant::Outline, ButtonSize::Large, theme).spans,
    );
    lines.push(cta);

    lines
}

fn draw_listing(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let hero = hero_lines(theme);
    let hero_height = (hero.len() as u16).min(area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(theme.typography.sizes.large),
            Constraint::Min(card::CARD_HEIGHT),
            Constraint::Length(2),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(hero).alignment(Alignment::Center), chunks[0]);
    frame.render_widget(
        Paragraph::new(heading("Featured Products", theme)).alignment(Alignment::Center),
        chunks[1],
    );

    draw_grid(frame, chunks[2], state, theme);
    draw_footer(frame, chunks[3], theme);
}

fn draw_grid(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let len = state.catalog.products().len();
    if len == 0 || area.height < card::CARD_HEIGHT {
        return;
    }

    let gap = theme.layout.grid_gap;
    let cols = grid_columns(theme.layout.kind, area.width) as usize;
    let row_height = card::CARD_HEIGHT + gap;
    let visible_rows = (((area.height + gap) / row_height).max(1)) as usize;
    let total_rows = len.div_ceil(cols);

    // Keep the selection visible
    let selected = state.selected_card.min(len - 1);
    let selected_row = selected / cols;
    let mut scroll = state.grid_scroll_row.min(total_rows.saturating_sub(1));
    if selected_row < scroll {
        scroll = selected_row;
    } else if selected_row >= scroll + visible_rows {
        scroll = selected_row + 1 - visible_rows;
    }
    state.grid_scroll_row = scroll;
    state.selected_card = selected;

    let tick = state.tick_count;
    let card_width = (area.width.saturating_sub(gap * (cols as u16 - 1))) / cols as u16;
    if card_width < 12 {
        return;
    }

    let CatalogState::Ready(products) = &state.catalog else { return };

    for (index, product) in products.iter().enumerate() {
        let row = index / cols;
        if row < scroll || row >= scroll + visible_rows {
            continue;
        }
        let col = index % cols;
        let rect = Rect {
            x: area.x + col as u16 * (card_width + gap),
            y: area.y + (row - scroll) as u16 * row_height,
            width: card_width,
            height: card::CARD_HEIGHT,
        };
        card::draw(frame, rect, product, index == selected, theme, tick);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let load_more =
        button::line("Load More Products (l)", ButtonVariant::Secondary, ButtonSize::Medium, theme);
    frame.render_widget(
        Paragraph::new(load_more).alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height > 1 {
        let hints = Line::from(Span::styled(
            "j/k select · r refresh · t theme · q quit",
            Style::default()
                .fg(theme.colors.text_secondary)
                .add_modifier(theme.typography.weights.light),
        ));
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            Rect { y: area.y + 1, height: 1, ..area },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_layout_gets_three_columns() {
        assert_eq!(grid_columns(LayoutKind::Grid, 160), 3);
    }

    #[test]
    fn other_layouts_get_two_columns() {
        assert_eq!(grid_columns(LayoutKind::Minimalist, 120), 2);
        assert_eq!(grid_columns(LayoutKind::Sidebar { width: 28 }, 120), 2);
    }

    #[test]
    fn narrow_areas_collapse_to_one_column() {
        for kind in [LayoutKind::Minimalist, LayoutKind::Sidebar { width: 28 }, LayoutKind::Grid] {
            assert_eq!(grid_columns(kind, 59), 1);
        }
    }
}

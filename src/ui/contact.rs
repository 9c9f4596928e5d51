//! Contact view: validated form plus contact details
//!
//! The minimalist and grid layouts place the form and the details side
//! by side when there is room; the sidebar layout stacks them.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, ContactState};
use crate::contact::Field;
use crate::theme::{LayoutKind, Theme};
use crate::ui::heading;

/// Draw the contact view
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(theme.typography.sizes.large), Constraint::Min(10)])
        .split(area);

    frame.render_widget(Paragraph::new(heading("Get in Touch", theme)), chunks[0]);

    let body = chunks[1];
    let side_by_side = body.width >= 70
        && matches!(theme.layout.kind, LayoutKind::Minimalist | LayoutKind::Grid);

    if side_by_side {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(body);
        draw_form(frame, pad_left(cols[0], 0, theme.spacing.sm), &state.contact, theme);
        draw_details(frame, pad_left(cols[1], theme.spacing.sm, 0), theme);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(6)])
            .split(body);
        draw_form(frame, rows[0], &state.contact, theme);
        draw_details(frame, rows[1], theme);
    }
}

fn pad_left(area: Rect, left: u16, right: u16) -> Rect {
    let trim = (left + right).min(area.width);
    Rect { x: area.x + left.min(area.width), width: area.width - trim, ..area }
}

fn draw_form(frame: &mut Frame, area: Rect, contact: &ContactState, theme: &Theme) {
    let block = Block::default()
        .title(" Send us a message ")
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.border))
        .style(Style::default().bg(theme.colors.card));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 10 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    for field in Field::all() {
        let focused = *field == contact.focused;
        lines.extend(field_lines(contact, *field, focused, inner.width as usize, theme));
        for _ in 0..theme.typography.line_heights.tight.max(1) {
            lines.push(Line::default());
        }
    }

    lines.push(status_line(contact, theme));
    lines.push(Line::from(Span::styled(
        "Enter send · Tab next field · Esc back",
        Style::default()
            .fg(theme.colors.text_secondary)
            .add_modifier(theme.typography.weights.light),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_lines(
    contact: &ContactState,
    field: Field,
    focused: bool,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(theme.colors.primary).add_modifier(theme.typography.weights.medium)
    } else {
        Style::default().fg(theme.colors.text_secondary)
    };

    let value = contact.form.field(field);
    // Show the tail of long values so the caret stays in view
    let visible_width = width.saturating_sub(4);
    let shown: String = {
        let chars: Vec<char> = value.chars().collect();
        let start = chars.len().saturating_sub(visible_width);
        chars[start..].iter().collect()
    };

    let mut input_spans = vec![
        Span::styled("> ", Style::default().fg(theme.colors.border)),
        Span::styled(shown, Style::default().fg(theme.colors.text)),
    ];
    if focused {
        input_spans.push(Span::styled(
            " ",
            Style::default().bg(theme.colors.text).add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines = vec![
        Line::from(Span::styled(field.label().to_string(), label_style)),
        Line::from(input_spans),
    ];

    if let Some(error) = contact.error_for(field) {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme.colors.secondary),
        )));
    }
    lines
}

fn status_line(contact: &ContactState, theme: &Theme) -> Line<'static> {
    if contact.rate_limited {
        return Line::from(Span::styled(
            "Too many submissions. Please wait a minute and try again.",
            Style::default().fg(theme.colors.secondary),
        ));
    }
    if let Some(submission) = &contact.submitted {
        return Line::from(Span::styled(
            format!("Thanks {}! We received your message.", submission.name),
            Style::default().fg(theme.colors.accent).add_modifier(theme.typography.weights.medium),
        ));
    }
    Line::default()
}

fn draw_details(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height < 4 {
        return;
    }
    let block = Block::default()
        .title(" Contact information ")
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.border))
        .style(Style::default().bg(theme.colors.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(theme.colors.text_secondary);
    let value = Style::default().fg(theme.colors.text);
    let lines = vec![
        Line::from(vec![Span::styled("Email  ", label), Span::styled("hello@vitrine.shop", value)]),
        Line::from(vec![Span::styled("Hours  ", label), Span::styled("Mon-Fri, 9:00-18:00", value)]),
        Line::from(vec![
            Span::styled("Studio ", label),
            Span::styled("42 Display Lane, Shopton", value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

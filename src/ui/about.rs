//! About view: static storefront copy plus the active design voice

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme::{LayoutKind, Theme};
use crate::ui::heading;

/// Draw the about view
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let body = Style::default().fg(theme.colors.text).add_modifier(theme.typography.weights.normal);

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..theme.spacing.xs {
        lines.push(Line::default());
    }
    lines.push(heading("About Vitrine", theme));
    for _ in 0..theme.typography.line_heights.normal {
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Vitrine is a small storefront that treats presentation as data.",
        body,
    )));
    lines.push(Line::from(Span::styled(
        "Every color, gap and structural decision on screen is resolved from",
        body,
    )));
    lines.push(Line::from(Span::styled(
        "the active token set, so switching themes reshapes the whole shop",
        body,
    )));
    lines.push(Line::from(Span::styled("without losing your place.", body)));

    for _ in 0..theme.typography.line_heights.loose {
        lines.push(Line::default());
    }

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    let intro_height = area.height.saturating_sub(8).max(1);
    frame.render_widget(para, Rect { height: intro_height.min(area.height), ..area });

    draw_voice_panel(frame, area, theme);
}

/// Panel describing the active theme in its own tokens
fn draw_voice_panel(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height < 8 {
        return;
    }
    let width = area.width.min(48);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.bottom() - 7,
        width,
        height: 6,
    };

    let block = Block::default()
        .title(" Design Voice ")
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.border))
        .style(Style::default().bg(theme.colors.surface));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let label = Style::default().fg(theme.colors.text_secondary);
    let value = Style::default().fg(theme.colors.text).add_modifier(theme.typography.weights.medium);

    let lines = vec![
        Line::from(vec![Span::styled("Theme      ", label), Span::styled(theme.name, value)]),
        Line::from(vec![
            Span::styled("Typeface   ", label),
            Span::styled(theme.typography.family, value),
        ]),
        Line::from(vec![
            Span::styled("Structure  ", label),
            Span::styled(structure_label(theme.layout.kind), value),
        ]),
        Line::from(vec![
            Span::styled("Motion     ", label),
            Span::styled(format!("{} ms", theme.animation.duration.as_millis()), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn structure_label(kind: LayoutKind) -> String {
    match kind {
        LayoutKind::Minimalist => "single column".to_string(),
        LayoutKind::Sidebar { width } => format!("sidebar, {width} cols"),
        LayoutKind::Grid => "card grid".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_label_names_every_kind() {
        assert_eq!(structure_label(LayoutKind::Minimalist), "single column");
        assert_eq!(structure_label(LayoutKind::Sidebar { width: 28 }), "sidebar, 28 cols");
        assert_eq!(structure_label(LayoutKind::Grid), "card grid");
    }
}

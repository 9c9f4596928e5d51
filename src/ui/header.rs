//! Header component: logo, view navigation and the theme picker
//!
//! Renders as a top bar or as a sidebar rail depending on the resolved
//! chrome. Both disclosure menus (collapsible navigation and the theme
//! dropdown) are drawn here as popups layered over the content.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::{AppState, Screen};
use crate::theme::{registry, LayoutKind, Theme, ThemeId, ThemeStore, Variant};
use crate::ui::chrome::{Zones, NARROW_WIDTH};

/// Dropdown popup width in columns
const DROPDOWN_WIDTH: u16 = 26;

/// Draw the header and any open disclosure popups
pub fn draw(frame: &mut Frame, zones: &Zones, state: &AppState, store: &ThemeStore) {
    let theme = store.tokens();
    let active = store.active_id();

    if zones.rail {
        draw_rail(frame, zones.header, state, theme, active);
    } else {
        draw_bar(frame, zones.header, state, theme, active);
    }

    if !zones.rail && state.nav_menu.disclosure.is_open() {
        draw_nav_menu(frame, zones, state, theme);
    }
    if state.theme_menu.disclosure.is_open() {
        draw_theme_dropdown(frame, zones, state, theme, active);
    }
}

fn header_background(theme: &Theme) -> Style {
    let bg = match theme.layout.kind {
        LayoutKind::Grid => theme.colors.card,
        LayoutKind::Minimalist | LayoutKind::Sidebar { .. } => theme.colors.surface,
    };
    Style::default().bg(bg)
}

/// Horizontal top-bar header
fn draw_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, active: ThemeId) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.colors.border))
        .style(header_background(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Single content row, vertically centered in the bar
    let row = Rect { y: inner.y + (inner.height - 1) / 2, height: 1, ..inner };
    let narrow = area.width < NARROW_WIDTH;
    let gap = " ".repeat(theme.spacing.md as usize);

    let mut spans = logo_spans(theme);
    if narrow {
        let menu_style = if state.nav_menu.disclosure.is_open() {
            Style::default().fg(theme.colors.primary)
        } else {
            Style::default().fg(theme.colors.text_secondary)
        };
        spans.push(Span::raw(gap));
        spans.push(Span::styled("☰ Menu (m)", menu_style));
    } else {
        for screen in Screen::all() {
            spans.push(Span::raw(gap.clone()));
            spans.push(nav_span(*screen, state.screen, theme));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), row);

    let button = Span::styled(
        format!(" {} ▾ ", active.display_name()),
        Style::default()
            .fg(theme.colors.surface)
            .bg(theme.colors.primary)
            .add_modifier(theme.typography.weights.medium),
    );
    frame.render_widget(
        Paragraph::new(Line::from(button)).alignment(Alignment::Right),
        row,
    );
}

/// Vertical rail header used by wide sidebar layouts
fn draw_rail(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, active: ThemeId) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.colors.border))
        .style(header_background(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = vec![Line::default(), Line::from(logo_spans(theme)), Line::default()];

    for screen in Screen::all() {
        let is_active = *screen == state.screen;
        let label = format!(" {:<width$}", nav_label(*screen, theme), width = width.saturating_sub(1));
        let style = if is_active {
            Style::default()
                .fg(theme.colors.primary)
                .bg(theme.colors.hover)
                .add_modifier(theme.typography.weights.medium)
        } else {
            Style::default()
                .fg(theme.colors.text_secondary)
                .add_modifier(theme.typography.weights.normal)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {} ▾ ", active.display_name()),
        Style::default()
            .fg(theme.colors.surface)
            .bg(theme.colors.primary)
            .add_modifier(theme.typography.weights.medium),
    )));

    frame.render_widget(Paragraph::new(lines), inner);

    // Key hints at the bottom of the rail
    if inner.height > 12 {
        let hints = Rect { y: inner.bottom() - 2, height: 2, ..inner };
        let hint_style =
            Style::default().fg(theme.colors.text_secondary).add_modifier(theme.typography.weights.light);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(" 1-3 navigate · t theme", hint_style)),
                Line::from(Span::styled(" q quit", hint_style)),
            ]),
            hints,
        );
    }
}

fn logo_spans(theme: &Theme) -> Vec<Span<'static>> {
    let bold = theme.typography.weights.bold;
    match theme.variant {
        Variant::Solid => vec![Span::styled(
            " Vitrine",
            Style::default().fg(theme.colors.primary).add_modifier(bold),
        )],
        Variant::Sharp => vec![Span::styled(
            " VITRINE",
            Style::default().fg(theme.colors.primary).add_modifier(bold),
        )],
        Variant::Vibrant => vec![
            Span::styled(" Vit", Style::default().fg(theme.colors.primary).add_modifier(bold)),
            Span::styled("rine", Style::default().fg(theme.colors.secondary).add_modifier(bold)),
        ],
    }
}

fn nav_label(screen: Screen, theme: &Theme) -> String {
    match theme.variant {
        Variant::Sharp => screen.title().to_uppercase(),
        Variant::Solid | Variant::Vibrant => screen.title().to_string(),
    }
}

fn nav_span(screen: Screen, current: Screen, theme: &Theme) -> Span<'static> {
    let label = nav_label(screen, theme);
    if screen == current {
        Span::styled(
            label,
            Style::default()
                .fg(theme.colors.primary)
                .add_modifier(theme.typography.weights.medium),
        )
    } else {
        Span::styled(
            label,
            Style::default()
                .fg(theme.colors.text_secondary)
                .add_modifier(theme.typography.weights.normal),
        )
    }
}

/// Collapsible navigation popup for narrow top bars
fn draw_nav_menu(frame: &mut Frame, zones: &Zones, state: &AppState, theme: &Theme) {
    let height = Screen::all().len() as u16 + 2;
    let area = popup_rect(
        zones.header.x + 1,
        zones.header.bottom(),
        22,
        height,
        frame.area(),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.border))
        .style(Style::default().bg(theme.colors.card));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let style = if *screen == state.screen {
                Style::default()
                    .fg(theme.colors.primary)
                    .add_modifier(theme.typography.weights.medium)
            } else {
                Style::default().fg(theme.colors.text_secondary)
            };
            Line::from(Span::styled(format!("{} {}", i + 1, nav_label(*screen, theme)), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Theme picker dropdown listing the registry in declaration order
fn draw_theme_dropdown(
    frame: &mut Frame,
    zones: &Zones,
    state: &AppState,
    theme: &Theme,
    active: ThemeId,
) {
    let height = ThemeId::all().len() as u16 + 2;
    let area = if zones.rail {
        // Below the rail's theme button
        popup_rect(zones.header.x + 1, zones.header.y + 8, DROPDOWN_WIDTH, height, frame.area())
    } else {
        let x = zones.header.right().saturating_sub(DROPDOWN_WIDTH + 1);
        popup_rect(x, zones.header.bottom(), DROPDOWN_WIDTH, height, frame.area())
    };

    let block = Block::default()
        .title(" Theme ")
        .borders(Borders::ALL)
        .border_type(theme.layout.border)
        .border_style(Style::default().fg(theme.colors.primary))
        .style(Style::default().bg(theme.colors.card));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line> = registry::entries()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if entry.id == active { "● " } else { "  " };
            let label = format!("{marker}{:<width$}", entry.name, width = width.saturating_sub(2));
            let style = if i == state.theme_menu.highlighted {
                Style::default()
                    .fg(theme.colors.text)
                    .bg(theme.colors.hover)
                    .add_modifier(theme.typography.weights.medium)
            } else if entry.id == active {
                Style::default().fg(theme.colors.primary)
            } else {
                Style::default().fg(theme.colors.text_secondary)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Clamp a popup rectangle into the frame
fn popup_rect(x: u16, y: u16, width: u16, height: u16, frame_area: Rect) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let x = x.min(frame_area.right().saturating_sub(width));
    let y = y.min(frame_area.bottom().saturating_sub(height));
    Rect::new(x, y, width, height)
}

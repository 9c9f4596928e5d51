//! Button styling helpers
//!
//! Buttons are rendered as styled line fragments. Colors come from the
//! semantic roles and padding from the spacing scale, so one code path
//! serves every registered theme.

use std::time::Duration;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

/// Visual treatment of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

/// Horizontal padding step of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    /// Padding columns per side, from the spacing scale
    fn padding(&self, theme: &Theme) -> u16 {
        match self {
            Self::Small => theme.spacing.xs,
            Self::Medium => theme.spacing.sm,
            Self::Large => theme.spacing.md,
        }
    }
}

/// Style for a button variant
pub fn style(variant: ButtonVariant, theme: &Theme) -> Style {
    let weights = theme.typography.weights;
    match variant {
        ButtonVariant::Primary => Style::default()
            .fg(theme.colors.surface)
            .bg(theme.colors.primary)
            .add_modifier(weights.medium),
        ButtonVariant::Secondary => Style::default()
            .fg(theme.colors.surface)
            .bg(theme.colors.secondary)
            .add_modifier(weights.medium),
        ButtonVariant::Outline => {
            Style::default().fg(theme.colors.primary).add_modifier(weights.medium)
        }
        ButtonVariant::Ghost => Style::default().fg(theme.colors.text).add_modifier(weights.normal),
    }
}

/// Render a button as a single styled line fragment
pub fn line(text: &str, variant: ButtonVariant, size: ButtonSize, theme: &Theme) -> Line<'static> {
    let pad = " ".repeat(size.padding(theme) as usize);
    let label = match variant {
        ButtonVariant::Outline => format!("[{pad}{text}{pad}]"),
        _ => format!("{pad}{text}{pad}"),
    };
    Line::from(Span::styled(label, style(variant, theme)))
}

/// Two-phase highlight pulse, timed by the animation tokens
///
/// The frame loop ticks roughly every 16 ms; one full on/off cycle
/// spans two animation durations.
pub fn highlight_phase(tick: u64, duration: Duration) -> bool {
    let ticks_per_phase = (duration.as_millis() as u64 / 16).max(1);
    (tick / ticks_per_phase) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MINIMALIST, NOIR};

    fn rendered(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn padding_grows_with_size() {
        let small = rendered(&line("Go", ButtonVariant::Primary, ButtonSize::Small, &MINIMALIST));
        let large = rendered(&line("Go", ButtonVariant::Primary, ButtonSize::Large, &MINIMALIST));
        assert!(large.len() > small.len());
        assert!(small.contains("Go"));
    }

    #[test]
    fn outline_buttons_are_bracketed() {
        let text = rendered(&line("Learn More", ButtonVariant::Outline, ButtonSize::Medium, &NOIR));
        assert!(text.starts_with('['));
        assert!(text.ends_with(']'));
    }

    #[test]
    fn primary_buttons_use_the_primary_role() {
        let style = style(ButtonVariant::Primary, &MINIMALIST);
        assert_eq!(style.bg, Some(MINIMALIST.colors.primary));
        assert_eq!(style.fg, Some(MINIMALIST.colors.surface));
    }

    #[test]
    fn highlight_phase_follows_the_animation_duration() {
        let duration = Duration::from_millis(160); // 10 ticks per phase
        assert!(highlight_phase(0, duration));
        assert!(highlight_phase(9, duration));
        assert!(!highlight_phase(10, duration));
        assert!(highlight_phase(20, duration));
    }

    #[test]
    fn highlight_phase_survives_instant_durations() {
        assert!(highlight_phase(0, Duration::ZERO));
        assert!(!highlight_phase(1, Duration::ZERO));
    }
}

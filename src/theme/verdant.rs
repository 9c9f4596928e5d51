//! Vibrant Green theme implementation

use std::time::Duration;

use ratatui::style::{Color, Modifier};
use ratatui::widgets::BorderType;

use super::{
    Animation, Colors, Easing, Layout, LayoutKind, LineHeightScale, SizeScale, Spacing, Theme,
    ThemeId, Typography, Variant, WeightScale,
};

/// Saturated green card-grid palette
pub const VERDANT: Theme = Theme {
    id: ThemeId::Verdant,
    name: "Vibrant Green",
    variant: Variant::Vibrant,

    colors: Colors {
        primary: Color::Rgb(16, 185, 129),       // #10b981 emerald
        secondary: Color::Rgb(5, 150, 105),      // #059669 darker green
        background: Color::Rgb(4, 120, 87),      // #047857 deep green
        surface: Color::Rgb(240, 253, 244),      // #f0fdf4 tinted white
        text: Color::Rgb(6, 78, 59),             // #064e3b dark green
        text_secondary: Color::Rgb(4, 120, 87),  // #047857 medium green
        accent: Color::Rgb(245, 158, 11),        // #f59e0b amber
        border: Color::Rgb(110, 231, 183),       // #6ee7b7
        card: Color::Rgb(236, 253, 245),         // #ecfdf5
        hover: Color::Rgb(255, 255, 255),        // #ffffff
    },

    typography: Typography {
        family: "Inter",
        sizes: SizeScale { small: 1, medium: 1, large: 2, xlarge: 4 },
        weights: WeightScale {
            light: Modifier::empty(),
            normal: Modifier::empty(),
            medium: Modifier::BOLD,
            bold: Modifier::BOLD.union(Modifier::ITALIC),
        },
        line_heights: LineHeightScale { tight: 0, normal: 1, loose: 2 },
    },

    spacing: Spacing { xs: 1, sm: 2, md: 4, lg: 6, xl: 8, xxl: 12 },

    layout: Layout {
        kind: LayoutKind::Grid,
        max_width: 160,
        container_padding: 4,
        header_height: 4,
        grid_gap: 4,
        border: BorderType::Rounded,
    },

    animation: Animation { duration: Duration::from_millis(300), easing: Easing::Spring },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdant_has_correct_identity() {
        assert_eq!(VERDANT.id, ThemeId::Verdant);
        assert_eq!(VERDANT.name, "Vibrant Green");
    }

    #[test]
    fn verdant_uses_grid_layout() {
        assert_eq!(VERDANT.layout.kind, LayoutKind::Grid);
        assert!(VERDANT.layout.kind.sidebar_width().is_none());
    }
}

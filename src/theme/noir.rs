//! Dark Professional theme implementation

use std::time::Duration;

use ratatui::style::{Color, Modifier};
use ratatui::widgets::BorderType;

use super::{
    Animation, Colors, Easing, Layout, LayoutKind, LineHeightScale, SizeScale, Spacing, Theme,
    ThemeId, Typography, Variant, WeightScale,
};

/// Dark sidebar palette
pub const NOIR: Theme = Theme {
    id: ThemeId::Noir,
    name: "Dark Professional",
    variant: Variant::Sharp,

    colors: Colors {
        primary: Color::Rgb(245, 158, 11),         // #f59e0b amber
        secondary: Color::Rgb(239, 68, 68),        // #ef4444 red
        background: Color::Rgb(15, 23, 42),        // #0f172a dark slate
        surface: Color::Rgb(30, 41, 59),           // #1e293b slate 800
        text: Color::Rgb(248, 250, 252),           // #f8fafc slate 50
        text_secondary: Color::Rgb(203, 213, 225), // #cbd5e1 slate 300
        accent: Color::Rgb(16, 185, 129),          // #10b981 emerald
        border: Color::Rgb(51, 65, 85),            // #334155 slate 700
        card: Color::Rgb(30, 41, 59),              // #1e293b slate 800
        hover: Color::Rgb(51, 65, 85),             // #334155 slate 700
    },

    typography: Typography {
        family: "Inter",
        sizes: SizeScale { small: 1, medium: 1, large: 2, xlarge: 3 },
        weights: WeightScale {
            light: Modifier::empty(),
            normal: Modifier::empty(),
            medium: Modifier::BOLD,
            bold: Modifier::BOLD.union(Modifier::UNDERLINED),
        },
        line_heights: LineHeightScale { tight: 0, normal: 1, loose: 2 },
    },

    spacing: Spacing { xs: 1, sm: 2, md: 4, lg: 6, xl: 8, xxl: 12 },

    layout: Layout {
        kind: LayoutKind::Sidebar { width: 28 },
        max_width: u16::MAX,
        container_padding: 3,
        header_height: 3,
        grid_gap: 3,
        border: BorderType::Plain,
    },

    animation: Animation { duration: Duration::from_millis(300), easing: Easing::EaseOut },
};

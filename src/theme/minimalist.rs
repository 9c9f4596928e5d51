//! Modern Minimalist theme implementation

use std::time::Duration;

use ratatui::style::{Color, Modifier};
use ratatui::widgets::BorderType;

use super::{
    Animation, Colors, Easing, Layout, LayoutKind, LineHeightScale, SizeScale, Spacing, Theme,
    ThemeId, Typography, Variant, WeightScale,
};

/// Light single-column palette
pub const MINIMALIST: Theme = Theme {
    id: ThemeId::Minimalist,
    name: "Modern Minimalist",
    variant: Variant::Solid,

    colors: Colors {
        primary: Color::Rgb(99, 102, 241),         // #6366f1 indigo
        secondary: Color::Rgb(139, 92, 246),       // #8b5cf6 purple
        background: Color::Rgb(255, 255, 255),     // #ffffff
        surface: Color::Rgb(248, 250, 252),        // #f8fafc
        text: Color::Rgb(15, 23, 42),              // #0f172a
        text_secondary: Color::Rgb(100, 116, 139), // #64748b
        accent: Color::Rgb(6, 182, 212),           // #06b6d4 cyan
        border: Color::Rgb(226, 232, 240),         // #e2e8f0
        card: Color::Rgb(255, 255, 255),           // #ffffff
        hover: Color::Rgb(241, 245, 249),          // #f1f5f9
    },

    typography: Typography {
        family: "Inter",
        sizes: SizeScale { small: 1, medium: 1, large: 2, xlarge: 3 },
        weights: WeightScale {
            light: Modifier::DIM,
            normal: Modifier::empty(),
            medium: Modifier::BOLD,
            bold: Modifier::BOLD,
        },
        line_heights: LineHeightScale { tight: 0, normal: 1, loose: 2 },
    },

    spacing: Spacing { xs: 1, sm: 2, md: 4, lg: 6, xl: 8, xxl: 12 },

    layout: Layout {
        kind: LayoutKind::Minimalist,
        max_width: 120,
        container_padding: 2,
        header_height: 3,
        grid_gap: 3,
        border: BorderType::Rounded,
    },

    animation: Animation { duration: Duration::from_millis(200), easing: Easing::Linear },
};

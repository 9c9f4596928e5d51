//! Theming system for Vitrine
//!
//! A theme is a complete token set: colors, typography, spacing, layout
//! and animation for one presentation mode. Token sets are immutable
//! `'static` constants; switching themes swaps the active reference.

mod minimalist;
mod noir;
mod verdant;
pub mod registry;
pub mod store;

pub use minimalist::MINIMALIST;
pub use noir::NOIR;
pub use store::{ThemeStore, TRANSITION_DELAY};
pub use verdant::VERDANT;

use std::fmt;
use std::time::Duration;

use ratatui::style::{Color, Modifier};
use ratatui::widgets::BorderType;

/// Identifier for a registered theme
///
/// The set of valid identifiers is closed at build time. Declaration
/// order here is the order themes appear in selection menus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    /// Light, single-column presentation
    #[default]
    Minimalist,
    /// Dark presentation with a navigation sidebar
    Noir,
    /// Green card-grid presentation
    Verdant,
}

impl ThemeId {
    /// Get the stable identifier used in durable storage
    pub fn storage_id(&self) -> &'static str {
        match self {
            Self::Minimalist => "theme1",
            Self::Noir => "theme2",
            Self::Verdant => "theme3",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Minimalist => "Modern Minimalist",
            Self::Noir => "Dark Professional",
            Self::Verdant => "Vibrant Green",
        }
    }

    /// Parse an identifier from a string (storage ids or friendly names)
    ///
    /// Returns `None` for anything outside the closed set. Callers fall
    /// back to the default id rather than erroring.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "theme1" | "minimalist" => Some(Self::Minimalist),
            "theme2" | "noir" | "dark" => Some(Self::Noir),
            "theme3" | "verdant" => Some(Self::Verdant),
            _ => None,
        }
    }

    /// List all registered identifiers in menu order
    pub fn all() -> &'static [ThemeId] {
        &[Self::Minimalist, Self::Noir, Self::Verdant]
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_id())
    }
}

impl std::str::FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| format!("Unknown theme: {}. Options: theme1, theme2, theme3", s))
    }
}

/// Named presentation divergence shared by all components
///
/// Components branch on `Layout::kind` for structure and on this for
/// finer visual treatment. Raw id comparisons stay out of component
/// code so every branch is exhaustive over a small closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Flat, understated chrome
    Solid,
    /// High-contrast chrome with uppercase headings
    Sharp,
    /// Saturated chrome with two-tone accents
    Vibrant,
}

/// Semantic color roles
///
/// Values are opaque presentation data. The engine never inspects them;
/// components look colors up by role and hand them to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub card: Color,
    pub hover: Color,
}

/// Vertical prominence of text blocks, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeScale {
    pub small: u16,
    pub medium: u16,
    pub large: u16,
    pub xlarge: u16,
}

/// Text emphasis per weight step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightScale {
    pub light: Modifier,
    pub normal: Modifier,
    pub medium: Modifier,
    pub bold: Modifier,
}

/// Blank rows between text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHeightScale {
    pub tight: u16,
    pub normal: u16,
    pub loose: u16,
}

/// Typography tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    /// Descriptive family label, surfaced in theme-facing UI
    pub family: &'static str,
    pub sizes: SizeScale,
    pub weights: WeightScale,
    pub line_heights: LineHeightScale,
}

/// Spacing scale in terminal cells, used uniformly for padding and gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    pub xxl: u16,
}

/// Structural arrangement selected by a theme
///
/// The sidebar width lives on the variant itself, so a sidebar layout
/// without a width is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Single centered column under a top bar
    Minimalist,
    /// Fixed-width navigation rail on the left
    Sidebar { width: u16 },
    /// Card grid under a prominent top bar
    Grid,
}

impl LayoutKind {
    /// Sidebar width in columns, when this is a sidebar layout
    pub fn sidebar_width(&self) -> Option<u16> {
        match self {
            Self::Sidebar { width } => Some(*width),
            Self::Minimalist | Self::Grid => None,
        }
    }
}

/// Layout tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    /// Content width cap in columns (`u16::MAX` for no cap)
    pub max_width: u16,
    /// Horizontal padding inside the content area
    pub container_padding: u16,
    /// Header height in rows
    pub header_height: u16,
    /// Gap between cards in the product grid
    pub grid_gap: u16,
    /// Border glyph set for cards and panels
    pub border: BorderType,
}

/// Easing style for micro-interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    Spring,
}

/// Animation tokens
///
/// Drives transition-overlay cadence and highlight timing. Components
/// never hardcode their own durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub duration: Duration,
    pub easing: Easing,
}

/// A complete token set for one presentation mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub variant: Variant,
    pub colors: Colors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub layout: Layout,
    pub animation: Animation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_id_is_theme1() {
        assert_eq!(ThemeId::default().storage_id(), "theme1");
    }

    #[test]
    fn parse_accepts_storage_ids() {
        for id in ThemeId::all() {
            assert_eq!(ThemeId::parse(id.storage_id()), Some(*id));
        }
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        assert_eq!(ThemeId::parse("theme9"), None);
        assert_eq!(ThemeId::parse(""), None);
        assert_eq!(ThemeId::parse("solarized"), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ThemeId::parse("Theme2"), Some(ThemeId::Noir));
        assert_eq!(ThemeId::parse(" THEME3 "), Some(ThemeId::Verdant));
    }

    #[test]
    fn sidebar_width_is_kind_specific() {
        assert_eq!(LayoutKind::Sidebar { width: 28 }.sidebar_width(), Some(28));
        assert_eq!(LayoutKind::Minimalist.sidebar_width(), None);
        assert_eq!(LayoutKind::Grid.sidebar_width(), None);
    }

    #[test]
    fn display_matches_storage_id() {
        assert_eq!(ThemeId::Noir.to_string(), "theme2");
    }
}

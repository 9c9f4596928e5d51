//! Frame chrome: structural arrangement per layout kind
//!
//! The split is a pure function of the frame area and the active
//! tokens, so every layout decision here is unit-testable without a
//! terminal.

use ratatui::layout::Rect;

use crate::theme::{LayoutKind, Theme};

/// Width below which a sidebar layout degrades to a top bar
///
/// The sidebar's navigation moves into the collapsible menu; it never
/// silently becomes the minimalist arrangement.
pub const NARROW_WIDTH: u16 = 80;

/// Resolved frame regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones {
    pub header: Rect,
    pub content: Rect,
    /// True when the header renders as a vertical rail on the left
    pub rail: bool,
}

/// Split the frame into header and content regions
pub fn split(area: Rect, theme: &Theme) -> Zones {
    match theme.layout.kind {
        LayoutKind::Sidebar { width } if area.width >= NARROW_WIDTH => {
            let width = width.min(area.width / 2);
            let header = Rect { width, ..area };
            let body = Rect {
                x: area.x + width,
                width: area.width.saturating_sub(width),
                ..area
            };
            Zones { header, content: content_inset(body, theme), rail: true }
        }
        LayoutKind::Minimalist | LayoutKind::Sidebar { .. } | LayoutKind::Grid => {
            let height = theme.layout.header_height.min(area.height);
            let header = Rect { height, ..area };
            let body = Rect {
                y: area.y + height,
                height: area.height.saturating_sub(height),
                ..area
            };
            Zones { header, content: content_inset(body, theme), rail: false }
        }
    }
}

/// Cap the content at the theme's max width, center it, and apply the
/// container padding
fn content_inset(area: Rect, theme: &Theme) -> Rect {
    let width = area.width.min(theme.layout.max_width);
    let centered = Rect { x: area.x + (area.width - width) / 2, width, ..area };

    let pad = theme.layout.container_padding;
    if centered.width <= pad * 2 {
        return centered;
    }
    Rect { x: centered.x + pad, width: centered.width - pad * 2, ..centered }
}

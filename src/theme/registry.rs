//! Closed catalog of registered token sets
//!
//! Lookup is total over [`ThemeId`]: the match below must cover every
//! variant, so a theme without a registry entry cannot compile.

use super::{minimalist::MINIMALIST, noir::NOIR, verdant::VERDANT, Theme, ThemeId};

/// Resolve the token set for an identifier
pub fn get(id: ThemeId) -> &'static Theme {
    match id {
        ThemeId::Minimalist => &MINIMALIST,
        ThemeId::Noir => &NOIR,
        ThemeId::Verdant => &VERDANT,
    }
}

/// Iterate registered token sets in menu order
pub fn entries() -> impl Iterator<Item = &'static Theme> {
    ThemeId::all().iter().map(|id| get(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::LayoutKind;

    #[test]
    fn registry_has_three_entries() {
        assert_eq!(entries().count(), 3);
    }

    #[test]
    fn entry_identity_matches_lookup_id() {
        for id in ThemeId::all() {
            assert_eq!(get(*id).id, *id);
        }
    }

    #[test]
    fn enumeration_order_is_declaration_order() {
        let ids: Vec<ThemeId> = entries().map(|t| t.id).collect();
        assert_eq!(ids, vec![ThemeId::Minimalist, ThemeId::Noir, ThemeId::Verdant]);
    }

    #[test]
    fn storage_ids_are_unique() {
        let mut ids: Vec<&str> = ThemeId::all().iter().map(|id| id.storage_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn sidebar_width_present_exactly_for_sidebar_layouts() {
        for theme in entries() {
            match theme.layout.kind {
                LayoutKind::Sidebar { .. } => {
                    assert!(theme.layout.kind.sidebar_width().is_some())
                }
                LayoutKind::Minimalist | LayoutKind::Grid => {
                    assert!(theme.layout.kind.sidebar_width().is_none())
                }
            }
        }
    }

    #[test]
    fn display_names_are_distinct_and_nonempty() {
        let mut names: Vec<&str> = entries().map(|t| t.name).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);
    }
}

//! Theme selection state, transition sequencing and persistence
//!
//! The store is the single writer for the active theme. Consumers read
//! whole token-set snapshots through it once per frame, so a selection
//! change is atomic from their point of view.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::theme::{registry, Theme, ThemeId};

/// Delay between a selection request and the visible token swap
///
/// Long enough for the transition overlay to get a frame on screen
/// before the layout changes; no real work happens in this window.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct PendingSelect {
    target: ThemeId,
    ready_at: Instant,
}

/// Process-wide theme selection state
pub struct ThemeStore {
    active: ThemeId,
    pending: Option<PendingSelect>,
    /// Durable storage location; `None` runs in-memory only
    config_path: Option<PathBuf>,
}

impl ThemeStore {
    /// Build the store from persisted state
    ///
    /// Reads the stored identifier once and validates it against the
    /// closed registry set. Absent, unreadable or unrecognized values
    /// fall back to the default identifier. Never fails: storage
    /// problems are logged and leave the store in-memory only.
    pub fn initialize(config_path: Option<PathBuf>) -> Self {
        let active = config_path
            .as_deref()
            .and_then(|path| match Config::load_from(path) {
                Ok(config) => Some(config),
                Err(err) => {
                    tracing::warn!("Failed to read theme selection: {:#}", err);
                    None
                }
            })
            .and_then(|config| ThemeId::parse(&config.theme))
            .unwrap_or_default();

        Self { active, pending: None, config_path }
    }

    /// Currently active identifier
    pub fn active_id(&self) -> ThemeId {
        self.active
    }

    /// Token set for the currently active theme
    pub fn tokens(&self) -> &'static Theme {
        registry::get(self.active)
    }

    /// Whether a selection is waiting on its transition window
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a theme change
    ///
    /// The flag flips synchronously; the swap lands on the first
    /// [`tick`](Self::tick) at or after `now + TRANSITION_DELAY`.
    /// Re-selecting the active id still runs the full window so the UX
    /// is consistent. A second request before the window elapses
    /// supersedes the first (last request wins).
    pub fn select(&mut self, id: ThemeId, now: Instant) {
        self.pending = Some(PendingSelect { target: id, ready_at: now + TRANSITION_DELAY });
    }

    /// Apply an identifier immediately, for session-start overrides
    ///
    /// Skips the transition window and does not persist.
    pub fn activate(&mut self, id: ThemeId) {
        self.pending = None;
        self.active = id;
    }

    /// Complete a pending selection whose window has elapsed
    ///
    /// The in-memory swap happens first; persistence follows and its
    /// failure never rolls the swap back.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending else { return };
        if now < pending.ready_at {
            return;
        }

        self.pending = None;
        self.active = pending.target;
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.config_path else { return };

        let config = Config { theme: self.active.storage_id().to_string() };
        if let Err(err) = config.save_to(path) {
            tracing::warn!("Failed to persist theme selection: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("config.json")
    }

    #[test]
    fn starts_on_default_without_persisted_state() {
        let store = ThemeStore::initialize(None);
        assert_eq!(store.active_id(), ThemeId::Minimalist);
        assert!(!store.is_transitioning());
    }

    #[test]
    fn select_flags_synchronously_and_swaps_after_delay() {
        let mut store = ThemeStore::initialize(None);
        let t0 = Instant::now();

        store.select(ThemeId::Noir, t0);
        assert!(store.is_transitioning());
        assert_eq!(store.active_id(), ThemeId::Minimalist);

        // Mid-window ticks change nothing observable but the flag
        store.tick(t0 + Duration::from_millis(50));
        assert!(store.is_transitioning());
        assert_eq!(store.active_id(), ThemeId::Minimalist);

        store.tick(t0 + TRANSITION_DELAY);
        assert!(!store.is_transitioning());
        assert_eq!(store.active_id(), ThemeId::Noir);
    }

    #[test]
    fn swap_is_atomic_from_the_consumer_view() {
        let mut store = ThemeStore::initialize(None);
        let t0 = Instant::now();

        let before = *store.tokens();
        store.select(ThemeId::Verdant, t0);
        assert_eq!(*store.tokens(), before);

        store.tick(t0 + TRANSITION_DELAY);
        let after = *store.tokens();
        assert_eq!(after, *registry::get(ThemeId::Verdant));
        assert_eq!(after.id, ThemeId::Verdant);
        assert_eq!(after.layout, registry::get(ThemeId::Verdant).layout);
    }

    #[test]
    fn rapid_double_select_is_last_request_wins() {
        let mut store = ThemeStore::initialize(None);
        let t0 = Instant::now();

        store.select(ThemeId::Noir, t0);
        store.select(ThemeId::Verdant, t0 + Duration::from_millis(50));

        // The first request's deadline passes without a swap
        store.tick(t0 + TRANSITION_DELAY);
        assert!(store.is_transitioning());
        assert_eq!(store.active_id(), ThemeId::Minimalist);

        store.tick(t0 + Duration::from_millis(50) + TRANSITION_DELAY);
        assert!(!store.is_transitioning());
        assert_eq!(store.active_id(), ThemeId::Verdant);
    }

    #[test]
    fn reselecting_active_id_still_runs_the_window() {
        let mut store = ThemeStore::initialize(None);
        let t0 = Instant::now();

        store.select(ThemeId::Minimalist, t0);
        assert!(store.is_transitioning());

        store.tick(t0 + TRANSITION_DELAY);
        assert!(!store.is_transitioning());
        assert_eq!(store.active_id(), ThemeId::Minimalist);
    }

    #[test]
    fn selection_round_trips_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_config_path(&dir);
        let t0 = Instant::now();

        let mut store = ThemeStore::initialize(Some(path.clone()));
        store.select(ThemeId::Noir, t0);
        store.tick(t0 + TRANSITION_DELAY);
        assert_eq!(store.active_id(), ThemeId::Noir);

        // Simulated reload
        let reloaded = ThemeStore::initialize(Some(path));
        assert_eq!(reloaded.active_id(), ThemeId::Noir);
    }

    #[test]
    fn persistence_happens_after_the_swap_not_before() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_config_path(&dir);
        let t0 = Instant::now();

        let mut store = ThemeStore::initialize(Some(path.clone()));
        store.select(ThemeId::Verdant, t0);

        // Reload mid-window: nothing was written yet
        let mid = ThemeStore::initialize(Some(path.clone()));
        assert_eq!(mid.active_id(), ThemeId::Minimalist);

        store.tick(t0 + TRANSITION_DELAY);
        let after = ThemeStore::initialize(Some(path));
        assert_eq!(after.active_id(), ThemeId::Verdant);
    }

    #[test]
    fn unknown_persisted_id_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_config_path(&dir);
        std::fs::write(&path, r#"{"theme":"theme9"}"#).unwrap();

        let store = ThemeStore::initialize(Some(path));
        assert_eq!(store.active_id(), ThemeId::Minimalist);
    }

    #[test]
    fn malformed_persisted_state_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_config_path(&dir);
        std::fs::write(&path, "not json at all").unwrap();

        let store = ThemeStore::initialize(Some(path));
        assert_eq!(store.active_id(), ThemeId::Minimalist);
    }

    #[test]
    fn write_failure_keeps_the_in_memory_selection() {
        // A path whose parent is a regular file cannot be written
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("config.json");
        let t0 = Instant::now();

        let mut store = ThemeStore::initialize(Some(path));
        store.select(ThemeId::Noir, t0);
        store.tick(t0 + TRANSITION_DELAY);

        assert_eq!(store.active_id(), ThemeId::Noir);
        assert!(!store.is_transitioning());
    }

    #[test]
    fn activate_is_immediate_and_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_config_path(&dir);

        let mut store = ThemeStore::initialize(Some(path.clone()));
        store.activate(ThemeId::Verdant);
        assert_eq!(store.active_id(), ThemeId::Verdant);
        assert!(!store.is_transitioning());
        assert!(!path.exists());
    }
}

//! Application state definitions

use crate::catalog::Product;
use crate::contact::{ContactForm, Field, FieldError, SubmissionLimiter};
use crate::theme::ThemeId;

/// Which view is currently displayed
///
/// Navigating between views never touches the theme store, so the
/// active theme survives every route change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    About,
    Contact,
}

impl Screen {
    /// All views in navigation order
    pub fn all() -> &'static [Screen] {
        &[Self::Home, Self::About, Self::Contact]
    }

    /// Label shown in navigation
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Next view in navigation order, wrapping around
    pub fn next(&self) -> Screen {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Contact,
            Self::Contact => Self::Home,
        }
    }
}

/// Two-state disclosure for menu controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Control re-activation flips the state
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Link activation and dismissal always land on Closed
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Collapsible navigation menu, used when the header is a narrow top bar
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenuState {
    pub disclosure: Disclosure,
}

/// Theme picker dropdown state
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeMenuState {
    pub disclosure: Disclosure,
    /// Index into [`ThemeId::all`] for the highlighted option
    pub highlighted: usize,
}

impl ThemeMenuState {
    /// Open with the active entry highlighted
    pub fn open_at(&mut self, active: ThemeId) {
        self.disclosure = Disclosure::Open;
        self.highlighted =
            ThemeId::all().iter().position(|id| *id == active).unwrap_or_default();
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % ThemeId::all().len();
    }

    pub fn highlight_prev(&mut self) {
        let len = ThemeId::all().len();
        self.highlighted = (self.highlighted + len - 1) % len;
    }

    /// The currently highlighted identifier
    pub fn highlighted_id(&self) -> ThemeId {
        ThemeId::all()[self.highlighted]
    }
}

/// Product listing lifecycle
#[derive(Debug, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

impl CatalogState {
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(products) => products,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// Contact view state
#[derive(Debug)]
pub struct ContactState {
    pub form: ContactForm,
    pub focused: Field,
    /// Validation errors from the last submit attempt
    pub errors: Vec<(Field, FieldError)>,
    /// Sanitized copy of the last accepted submission
    pub submitted: Option<ContactForm>,
    pub rate_limited: bool,
    pub limiter: SubmissionLimiter,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            focused: Field::Name,
            errors: Vec::new(),
            submitted: None,
            rate_limited: false,
            limiter: SubmissionLimiter::default(),
        }
    }
}

impl ContactState {
    /// Error message for a field, if the last submit flagged one
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }
}

/// Current application state
#[derive(Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    pub nav_menu: NavMenuState,
    pub theme_menu: ThemeMenuState,
    pub catalog: CatalogState,
    pub contact: ContactState,
    /// Selected card index in the product grid
    pub selected_card: usize,
    /// First visible grid row, kept in step with the selection
    pub grid_scroll_row: usize,
    /// Recoverable top-level failure shown by the error screen
    pub runtime_error: Option<String>,
    /// Frame counter driving spinners and highlight pulses
    pub tick_count: u64,
}

impl AppState {
    /// Close both disclosure menus
    pub fn close_menus(&mut self) {
        self.nav_menu.disclosure.close();
        self.theme_menu.disclosure.close();
    }

    /// Move the product selection, clamped to the listing
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.catalog.products().len();
        if len == 0 {
            self.selected_card = 0;
            return;
        }
        let current = self.selected_card as isize;
        self.selected_card = (current + delta).clamp(0, len as isize - 1) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_toggles_between_the_two_states() {
        let mut d = Disclosure::default();
        assert!(!d.is_open());
        d.toggle();
        assert!(d.is_open());
        d.toggle();
        assert!(!d.is_open());
    }

    #[test]
    fn disclosure_close_is_idempotent() {
        let mut d = Disclosure::Open;
        d.close();
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn nav_and_theme_disclosures_are_independent() {
        let mut state = AppState::default();
        state.nav_menu.disclosure.toggle();
        assert!(state.nav_menu.disclosure.is_open());
        assert!(!state.theme_menu.disclosure.is_open());

        state.theme_menu.disclosure.toggle();
        state.nav_menu.disclosure.close();
        assert!(state.theme_menu.disclosure.is_open());
    }

    #[test]
    fn theme_menu_opens_on_the_active_entry() {
        let mut menu = ThemeMenuState::default();
        menu.open_at(ThemeId::Verdant);
        assert!(menu.disclosure.is_open());
        assert_eq!(menu.highlighted_id(), ThemeId::Verdant);
    }

    #[test]
    fn theme_menu_highlight_wraps() {
        let mut menu = ThemeMenuState::default();
        menu.open_at(ThemeId::Verdant);
        menu.highlight_next();
        assert_eq!(menu.highlighted_id(), ThemeId::Minimalist);
        menu.highlight_prev();
        assert_eq!(menu.highlighted_id(), ThemeId::Verdant);
    }

    #[test]
    fn screen_navigation_wraps() {
        assert_eq!(Screen::Contact.next(), Screen::Home);
        assert_eq!(Screen::Home.next(), Screen::About);
    }

    #[test]
    fn selection_clamps_to_the_listing() {
        let mut state = AppState::default();
        state.move_selection(5);
        assert_eq!(state.selected_card, 0);

        state.catalog = CatalogState::Ready(sample_products(3));
        state.move_selection(5);
        assert_eq!(state.selected_card, 2);
        state.move_selection(-10);
        assert_eq!(state.selected_card, 0);
    }

    fn sample_products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: i as u64,
                title: format!("Product {i}"),
                price: 9.99,
                description: "A fine product".to_string(),
                category: "misc".to_string(),
                image: String::new(),
                rating: crate::catalog::Rating { rate: 4.0, count: 10 },
            })
            .collect()
    }
}

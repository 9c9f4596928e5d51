//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::catalog::{CatalogClient, CatalogError, Product};
use crate::theme::ThemeStore;
use crate::ui;
use input::{Action, MenuAction};
use state::{AppState, CatalogState, Screen};

/// Products requested when no count cap is given on the command line
const DEFAULT_PRODUCT_LIMIT: u32 = 8;

/// Extra products requested by each load-more action
const LOAD_MORE_STEP: u32 = 8;

/// Events delivered to the main loop from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// A catalog fetch finished
    Catalog(Result<Vec<Product>, CatalogError>),
}

/// The main application
pub struct App {
    /// Theme selection state and persistence
    store: ThemeStore,

    /// Current application state
    state: AppState,

    /// Catalog service client
    client: CatalogClient,

    /// Product count cap for the next fetch
    limit: u32,

    /// Channel feeding background results into the loop
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(store: ThemeStore, limit: Option<u32>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            store,
            state: AppState::default(),
            client: CatalogClient::new(),
            limit: limit.unwrap_or(DEFAULT_PRODUCT_LIMIT),
            events_tx,
            events_rx,
            terminal,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        self.spawn_fetch();

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.store);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                // Recoverable boundary: show the error
                                // screen, keep the session and theme
                                tracing::error!("Update failed: {:#}", e);
                                self.state.runtime_error = Some(format!("{:#}", e));
                            }
                        }
                    }
                }
            }

            // Apply finished background work
            while let Ok(event) = self.events_rx.try_recv() {
                self.apply_event(event);
            }

            // Complete any theme transition whose window has elapsed
            self.store.tick(Instant::now());

            self.state.tick_count = self.state.tick_count.wrapping_add(1);
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Start a catalog fetch on a background task
    fn spawn_fetch(&mut self) {
        self.state.catalog = CatalogState::Loading;

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let limit = self.limit;

        tokio::spawn(async move {
            let result = client.fetch_products(Some(limit)).await;
            let _ = tx.send(AppEvent::Catalog(result));
        });
    }

    /// Fold a background event into the state
    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Catalog(Ok(products)) => {
                tracing::debug!("Catalog fetch returned {} products", products.len());
                self.state.selected_card =
                    self.state.selected_card.min(products.len().saturating_sub(1));
                self.state.catalog = CatalogState::Ready(products);
            }
            AppEvent::Catalog(Err(err)) => {
                if err.is_recoverable() {
                    tracing::warn!("Catalog fetch failed, retry available: {}", err);
                } else {
                    tracing::error!("Catalog fetch failed: {}", err);
                }
                self.state.catalog = CatalogState::Failed(err.to_string());
            }
        }
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        // The error screen swallows everything except recovery and quit
        if self.state.runtime_error.is_some() {
            match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.state.runtime_error = None,
                KeyCode::Char('q') => return Ok(true),
                _ => {}
            }
            return Ok(false);
        }

        if let Some(action) = input::key_with_modifier_to_action(key.code, key.modifiers) {
            return Ok(self.apply_action(action));
        }

        if self.state.theme_menu.disclosure.is_open() {
            if let Some(action) = input::menu_key_to_action(key.code) {
                self.apply_menu_action(action);
            }
            return Ok(false);
        }

        match self.state.screen {
            Screen::Contact => {
                self.handle_contact_key(key.code);
                Ok(false)
            }
            Screen::Home | Screen::About => {
                if let Some(action) = input::browse_key_to_action(key.code) {
                    return Ok(self.apply_action(action));
                }
                if key.code == KeyCode::Esc {
                    self.state.close_menus();
                }
                Ok(false)
            }
        }
    }

    /// Apply a global action, returns true if should exit
    fn apply_action(&mut self, action: Action) -> bool {
        match action {
            Action::GoHome => self.navigate(Screen::Home),
            Action::GoAbout => self.navigate(Screen::About),
            Action::GoContact => self.navigate(Screen::Contact),
            Action::NextScreen => self.navigate(self.state.screen.next()),
            Action::ToggleNavMenu => self.state.nav_menu.disclosure.toggle(),
            Action::ToggleThemeMenu => {
                if self.state.theme_menu.disclosure.is_open() {
                    self.state.theme_menu.disclosure.close();
                } else {
                    self.state.theme_menu.open_at(self.store.active_id());
                }
            }
            Action::Up => self.state.move_selection(-1),
            Action::Down => self.state.move_selection(1),
            Action::Retry => {
                if matches!(self.state.catalog, CatalogState::Failed(_)) {
                    self.spawn_fetch();
                }
            }
            Action::LoadMore => {
                if matches!(self.state.catalog, CatalogState::Ready(_)) {
                    self.limit += LOAD_MORE_STEP;
                    self.spawn_fetch();
                }
            }
            Action::Quit => return true,
        }
        false
    }

    /// Navigation closes the collapsible menu, like a link activation
    fn navigate(&mut self, screen: Screen) {
        self.state.screen = screen;
        self.state.nav_menu.disclosure.close();
    }

    /// Apply an action while the theme dropdown is open
    fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::HighlightUp => self.state.theme_menu.highlight_prev(),
            MenuAction::HighlightDown => self.state.theme_menu.highlight_next(),
            MenuAction::Select => {
                let id = self.state.theme_menu.highlighted_id();
                self.store.select(id, Instant::now());
                self.state.theme_menu.disclosure.close();
            }
            MenuAction::Dismiss => self.state.theme_menu.disclosure.close(),
        }
    }

    /// Handle a key press while the contact form has focus
    fn handle_contact_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                if self.state.nav_menu.disclosure.is_open() {
                    self.state.nav_menu.disclosure.close();
                } else {
                    self.navigate(Screen::Home);
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.contact.focused = self.state.contact.focused.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.contact.focused = self.state.contact.focused.prev();
            }
            KeyCode::Enter => self.submit_contact(),
            KeyCode::Backspace => {
                let focused = self.state.contact.focused;
                self.state.contact.form.field_mut(focused).pop();
            }
            KeyCode::Char(c) => {
                let focused = self.state.contact.focused;
                self.state.contact.form.field_mut(focused).push(c);
            }
            _ => {}
        }
    }

    /// Validate, rate-limit and accept the contact form
    fn submit_contact(&mut self) {
        let contact = &mut self.state.contact;

        contact.errors = contact.form.validate();
        if !contact.errors.is_empty() {
            contact.submitted = None;
            return;
        }

        if !contact.limiter.try_submit(Instant::now()) {
            contact.rate_limited = true;
            return;
        }

        contact.rate_limited = false;
        contact.submitted = Some(contact.form.sanitized());
        contact.form = Default::default();
        contact.focused = crate::contact::Field::Name;
        tracing::info!("Contact form submitted");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

//! Vitrine - a themeable storefront for the terminal
//!
//! Vitrine renders a product catalog fetched from a remote service and
//! switches between three complete visual presentations at runtime,
//! without restarting or losing navigation state. Everything on screen
//! resolves from the active design-token set.

pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::{Theme, ThemeId, ThemeStore};

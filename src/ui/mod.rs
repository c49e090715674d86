//! TUI module for the Fliplingo application.

mod app;
pub mod theme;
mod widgets;

pub use app::App;
pub use theme::Theme;

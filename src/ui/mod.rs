//! UI module - menu panels.

mod panels;
mod plugin;

pub use panels::{GameOverPanel, MainMenuPanel, PauseMenuPanel};
pub use plugin::UiPlugin;

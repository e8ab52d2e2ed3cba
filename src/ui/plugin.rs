//! UI plugin - one panel per menu state.

use bevy::prelude::*;

use crate::core::GameState;

use super::panels::*;

/// UI plugin - persistent menu panels toggled by game state.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_panels)
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), show_main_menu)
            .add_systems(OnExit(GameState::MainMenu), hide_main_menu)
            // Pause overlay
            .add_systems(OnEnter(GameState::Paused), show_pause_menu)
            .add_systems(OnExit(GameState::Paused), hide_pause_menu)
            // Game over
            .add_systems(OnEnter(GameState::GameOver), show_game_over)
            .add_systems(OnExit(GameState::GameOver), hide_game_over);
    }
}

//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Player movement
//! only runs in the Playing state, while each menu panel is visible in
//! exactly one state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on gamepad input:
/// - Start in `MainMenu` at launch
/// - Enter `Playing` when a run starts
/// - `Paused` freezes gameplay but keeps the track visible
/// - `GameOver` when the runner hits an obstacle
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Main menu / title screen
    #[default]
    MainMenu,
    /// Active gameplay
    Playing,
    /// Run is paused (overlay on gameplay)
    Paused,
    /// Runner crashed into an obstacle
    GameOver,
}

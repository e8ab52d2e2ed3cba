//! Rushline - a gamepad-driven endless runner built on Bevy.
//!
//! The player runs forward at constant speed down a straight track, strafing
//! between obstacles, jumping over low barriers and sliding under high bars.
//! Hitting an obstacle ends the run.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, time freeze on pause
//! - **Input**: Per-tick gamepad snapshot shared by menus and movement
//! - **Flow**: Menu/game-flow dispatch (start, pause, restart, quit)
//! - **Player**: Kinematic runner movement, jumping, sliding, reset
//! - **Track**: Environment root, ground and obstacle geometry
//! - **UI**: Main menu, pause and game over panels

pub mod core;
pub mod flow;
pub mod input;
pub mod player;
pub mod track;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct RushlinePlugin;

impl Plugin for RushlinePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input snapshot
            .add_plugins(input::InputPlugin)

            // Menu / game flow
            .add_plugins(flow::FlowPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Track systems
            .add_plugins(track::TrackPlugin)

            // UI panels
            .add_plugins(ui::UiPlugin);
    }
}

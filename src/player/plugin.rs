//! Player plugin - spawning, movement, hazard contact, and run reset.

use bevy::prelude::*;

use crate::core::{GameState, TickSet};

use super::movement;

/// Player plugin - the runner's motion controller.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (movement::load_player_config, movement::spawn_player).chain(),
        )
        // Movement only runs during an active run; pausing or crashing
        // removes it from the schedule entirely.
        .add_systems(
            Update,
            (movement::player_movement, movement::detect_hazard_contact)
                .chain()
                .in_set(TickSet::Motion)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(Update, movement::reset_player.in_set(TickSet::Motion))
        // The whole scene is off until a run starts; the runner follows the
        // environment root's visibility.
        .add_systems(OnEnter(GameState::MainMenu), movement::hide_player)
        .add_systems(OnExit(GameState::MainMenu), movement::show_player);
    }
}

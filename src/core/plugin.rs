//! Core plugin that sets up game states, events, and the pause time freeze.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Per-tick ordering of the gameplay schedule.
///
/// Input is sampled once at the start of the tick, flow dispatch reads that
/// snapshot next, and motion integration runs last. At most one flow
/// transition happens per tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Sample the gamepad into a snapshot resource
    ReadInput,
    /// Menu/game-flow dispatch
    Flow,
    /// Player motion and track updates
    Motion,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (MainMenu, Playing, Paused, GameOver)
/// - Global events (ResetRunEvent, GameOverEvent)
/// - Tick ordering (input -> flow -> motion)
/// - The virtual-time freeze while paused or on game over
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<ResetRunEvent>()
            .add_event::<GameOverEvent>()

            // Input sampling precedes all state transitions within a tick
            .configure_sets(
                Update,
                (TickSet::ReadInput, TickSet::Flow, TickSet::Motion).chain(),
            )

            // Gameplay clock stops while a menu overlays the run
            .add_systems(OnEnter(GameState::Paused), freeze_time)
            .add_systems(OnExit(GameState::Paused), resume_time)
            .add_systems(OnEnter(GameState::GameOver), freeze_time)
            .add_systems(OnExit(GameState::GameOver), resume_time);
    }
}

/// Stop the gameplay clock. Timers and movement read virtual time, so
/// nothing advances while a pause or game over overlay is up.
fn freeze_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

/// Resume the gameplay clock.
fn resume_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

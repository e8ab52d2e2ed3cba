//! Flow plugin - applies the dispatch table to the running app.
//!
//! Side effects of a flow action are limited to state transitions, run-reset
//! events, and process exit. Panel visibility and the time freeze hang off
//! the state transitions themselves (see the ui, track and core plugins), so
//! panel state and the active game state cannot drift apart.

use bevy::prelude::*;

use crate::core::{GameOverEvent, GameState, ResetRunEvent, TickSet};
use crate::input::PadSnapshot;

use super::actions::{flow_action, FlowAction};

/// Flow plugin - menu and game-flow input handling.
pub struct FlowPlugin;

impl Plugin for FlowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_flow_action,
                handle_game_over.run_if(in_state(GameState::Playing)),
            )
                .chain()
                .in_set(TickSet::Flow),
        );
    }
}

/// Dispatch this tick's pad snapshot and apply the resulting action.
fn apply_flow_action(
    pad: Res<PadSnapshot>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut resets: EventWriter<ResetRunEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(action) = flow_action(state.get(), &pad) else {
        return;
    };

    match action {
        FlowAction::StartRun | FlowAction::Restart => {
            resets.send(ResetRunEvent);
            next_state.set(GameState::Playing);
        }
        FlowAction::Resume => {
            next_state.set(GameState::Playing);
        }
        FlowAction::Pause => {
            next_state.set(GameState::Paused);
        }
        FlowAction::QuitToMenu => {
            next_state.set(GameState::MainMenu);
        }
        FlowAction::QuitApp => {
            exit.send(AppExit::Success);
        }
        FlowAction::ShowAbout => {
            // TODO: wire up the about panel once it has content
            info!("about screen is not implemented yet");
        }
    }
}

/// External end-of-run trigger: a hazard contact ends the run.
fn handle_game_over(
    mut events: EventReader<GameOverEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if events.read().next().is_some() {
        next_state.set(GameState::GameOver);
    }
}

//! Menu/game-flow dispatch table.
//!
//! Pure mapping from (current state, pad snapshot) to at most one flow
//! action per tick. Only the active state's bindings are live; within a
//! state the first matching button wins.

use crate::core::GameState;
use crate::input::PadSnapshot;

/// A discrete flow decision for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Leave the main menu and begin a run
    StartRun,
    /// Show the about screen (placeholder, not implemented)
    ShowAbout,
    /// Terminate the process
    QuitApp,
    /// Close the pause overlay and continue the run
    Resume,
    /// Begin a fresh run from pause or game over
    Restart,
    /// Abandon the run and return to the main menu
    QuitToMenu,
    /// Freeze the run and show the pause overlay
    Pause,
}

/// Decide this tick's flow action, if any.
///
/// Returns `None` when no gamepad is connected - dispatch is skipped
/// entirely rather than treated as neutral input.
pub fn flow_action(state: &GameState, pad: &PadSnapshot) -> Option<FlowAction> {
    if !pad.connected {
        return None;
    }

    match state {
        GameState::MainMenu => {
            if pad.confirm_pressed {
                Some(FlowAction::StartRun)
            } else if pad.alt_pressed {
                Some(FlowAction::ShowAbout)
            } else if pad.cancel_pressed {
                Some(FlowAction::QuitApp)
            } else {
                None
            }
        }
        GameState::Paused => {
            if pad.confirm_pressed {
                Some(FlowAction::Resume)
            } else if pad.alt_pressed {
                Some(FlowAction::Restart)
            } else if pad.cancel_pressed {
                Some(FlowAction::QuitToMenu)
            } else {
                None
            }
        }
        GameState::GameOver => {
            if pad.confirm_pressed {
                Some(FlowAction::Restart)
            } else if pad.cancel_pressed {
                Some(FlowAction::QuitToMenu)
            } else {
                None
            }
        }
        GameState::Playing => {
            if pad.start_pressed {
                Some(FlowAction::Pause)
            } else {
                None
            }
        }
    }
}

//! Global events used for cross-system communication.
//!
//! Events keep the flow controller decoupled from the systems that act on
//! its decisions: the flow dispatch announces a new run, and the player and
//! track modules each reset themselves in response.

use bevy::prelude::*;

/// Sent when a run starts or restarts.
///
/// The player module resets position, velocity and slide state; the track
/// module rebuilds its obstacles. Consumers must be idempotent, as a restart
/// may fire while already reset.
#[derive(Event)]
pub struct ResetRunEvent;

/// Sent when the run ends (the runner touched an obstacle).
///
/// The flow controller listens for this while in the Playing state and
/// transitions to GameOver. This is the only path from Playing to GameOver;
/// no input binding reaches it directly.
#[derive(Event)]
pub struct GameOverEvent;

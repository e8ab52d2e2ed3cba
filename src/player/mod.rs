//! Player module - the runner's kinematic motion controller.

mod components;
mod movement;
mod plugin;

#[cfg(test)]
mod tests;

pub use components::{MotionInput, MovementState, Player, PlayerConfig, StartPosition};
pub use movement::{hide_player, show_player, spawn_player};
pub use plugin::PlayerPlugin;

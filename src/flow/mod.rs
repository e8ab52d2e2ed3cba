//! Flow module - the menu/game-flow controller.

mod actions;
mod plugin;


pub use actions::{flow_action, FlowAction};
pub use plugin::FlowPlugin;

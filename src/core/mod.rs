//! Core module - game states, global events, tick ordering.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::{CorePlugin, TickSet};
pub use states::GameState;

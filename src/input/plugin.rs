//! Input plugin - gamepad snapshot resource and sampling system.

use bevy::prelude::*;

use crate::core::TickSet;

use super::pad::read_pad_snapshot;
use super::PadSnapshot;

/// Input plugin - samples the gamepad once per tick.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PadSnapshot>()
            .add_systems(Update, read_pad_snapshot.in_set(TickSet::ReadInput));
    }
}

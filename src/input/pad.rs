//! Per-tick gamepad snapshot.
//!
//! Both the flow dispatch and player movement consume the same device, so
//! the pad is sampled exactly once per tick into a plain resource. A missing
//! gamepad is a valid, non-error situation: the snapshot reports
//! `connected == false` and every consumer skips its tick entirely.

use bevy::prelude::*;

/// Snapshot of the gamepad state for the current tick.
///
/// Button fields are edge-triggered: true only on the tick the button went
/// from released to pressed. The same physical buttons serve double duty by
/// role - South is menu Confirm and in-game Jump, East is menu Cancel and
/// in-game Slide.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PadSnapshot {
    /// False when no gamepad is connected; all other fields are neutral then.
    pub connected: bool,
    /// South (A) press edge
    pub confirm_pressed: bool,
    /// North (Y) press edge
    pub alt_pressed: bool,
    /// East (B) press edge
    pub cancel_pressed: bool,
    /// Start press edge
    pub start_pressed: bool,
    /// Left stick X in [-1, 1]; positive is right
    pub strafe: f32,
}

impl PadSnapshot {
    /// Jump shares the South button with menu Confirm.
    pub fn jump_pressed(&self) -> bool {
        self.confirm_pressed
    }

    /// Slide shares the East button with menu Cancel.
    pub fn slide_pressed(&self) -> bool {
        self.cancel_pressed
    }
}

/// Rebuild the snapshot from the first connected gamepad.
///
/// Runs at the start of every tick, before flow dispatch and movement.
pub fn read_pad_snapshot(pads: Query<&Gamepad>, mut snapshot: ResMut<PadSnapshot>) {
    let Some(pad) = pads.iter().next() else {
        *snapshot = PadSnapshot::default();
        return;
    };

    *snapshot = PadSnapshot {
        connected: true,
        confirm_pressed: pad.just_pressed(GamepadButton::South),
        alt_pressed: pad.just_pressed(GamepadButton::North),
        cancel_pressed: pad.just_pressed(GamepadButton::East),
        start_pressed: pad.just_pressed(GamepadButton::Start),
        strafe: pad.left_stick().x,
    };
}

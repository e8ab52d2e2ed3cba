//! Player components, motion state, and tuning config.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// World position captured at spawn; runs restart from here.
#[derive(Component)]
pub struct StartPosition(pub Vec3);

/// Continuous and edge-triggered motion input for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionInput {
    /// Left stick X in [-1, 1]
    pub strafe: f32,
    /// South button press edge
    pub jump_pressed: bool,
    /// East button press edge
    pub slide_pressed: bool,
}

impl MotionInput {
    pub fn from_pad(pad: &crate::input::PadSnapshot) -> Self {
        Self {
            strafe: pad.strafe,
            jump_pressed: pad.jump_pressed(),
            slide_pressed: pad.slide_pressed(),
        }
    }
}

/// Kinematic motion state of the runner.
///
/// Invariant: `is_sliding` is true exactly while `slide_timer > 0`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    /// Vertical speed in units/second; gravity pulls it negative while airborne
    pub vertical_velocity: f32,
    /// Set from the post-move ground contact, cleared only by jumping
    pub is_grounded: bool,
    /// Duck profile active
    pub is_sliding: bool,
    /// Seconds of slide remaining
    pub slide_timer: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            is_grounded: true,
            is_sliding: false,
            slide_timer: 0.0,
        }
    }
}

impl MovementState {
    /// Advance one tick of motion and return the velocity vector to apply.
    ///
    /// The caller multiplies the result by `dt` and hands it to the
    /// character controller; collision response and the resulting ground
    /// contact come back through [`MovementState::apply_ground_contact`].
    ///
    /// Forward is `-Z`, right is `+X`. Forward speed is constant - the
    /// runner never stops while this is being ticked.
    pub fn integrate(&mut self, input: &MotionInput, config: &PlayerConfig, dt: f32) -> Vec3 {
        // Constant forward motion plus strafing
        let mut horizontal = Vec3::NEG_Z * config.forward_speed;
        horizontal += Vec3::X * (input.strafe * config.strafe_speed);

        // Gravity only while airborne. Integrated before the jump check so
        // the tick a jump fires ends with exactly `jump_force` vertical
        // velocity.
        if !self.is_grounded {
            self.vertical_velocity += config.gravity * dt;
        }

        // Jump, edge-triggered and only from the ground
        if self.is_grounded && input.jump_pressed {
            self.vertical_velocity = config.jump_force;
            self.is_grounded = false;
        }

        // Slide, only from the ground and not while already sliding.
        // Sliding leaves `is_grounded` alone, so a jump out of a slide
        // is allowed.
        if self.is_grounded && input.slide_pressed && !self.is_sliding {
            self.is_sliding = true;
            self.slide_timer = config.slide_duration;
        }

        // Slide countdown; nothing cancels a slide early
        if self.is_sliding {
            self.slide_timer -= dt;
            if self.slide_timer <= 0.0 {
                self.is_sliding = false;
                self.slide_timer = 0.0;
            }
        }

        horizontal + Vec3::Y * self.vertical_velocity
    }

    /// Fold the mover's post-move ground contact back into the state.
    ///
    /// While descending onto ground the vertical velocity is clamped to a
    /// small negative value instead of zero, keeping the runner pressed
    /// against sloped ground rather than bouncing.
    pub fn apply_ground_contact(&mut self, grounded_after_move: bool, config: &PlayerConfig) {
        if grounded_after_move && self.vertical_velocity < 0.0 {
            self.vertical_velocity = config.ground_stick_velocity;
            self.is_grounded = true;
        }
    }

    /// Restore the state for a fresh run. Idempotent.
    pub fn reset(&mut self) {
        self.vertical_velocity = 0.0;
        self.is_grounded = true;
        self.is_sliding = false;
        self.slide_timer = 0.0;
    }
}

/// Runner tuning, loaded from assets/data/player_config.ron.
#[derive(Resource, Clone, Deserialize)]
pub struct PlayerConfig {
    /// Constant forward speed in units per second
    pub forward_speed: f32,
    /// Strafe speed at full stick deflection
    pub strafe_speed: f32,
    /// Initial vertical velocity of a jump
    pub jump_force: f32,
    /// Custom gravity, negative, for tight jump arcs
    pub gravity: f32,
    /// Seconds a slide lasts
    pub slide_duration: f32,
    /// Vertical velocity held while touching ground, keeps the capsule glued
    /// to slopes
    pub ground_stick_velocity: f32,
    /// Standing capsule height
    pub stand_height: f32,
    /// Duck capsule height while sliding
    pub slide_height: f32,
    /// Capsule radius
    pub collider_radius: f32,
    /// Capsule center at the start line
    pub start_position: (f32, f32, f32),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            forward_speed: 10.0,
            strafe_speed: 6.0,
            jump_force: 8.0,
            gravity: -20.0,
            slide_duration: 0.6,
            ground_stick_velocity: -2.0,
            stand_height: 2.0,
            slide_height: 0.8,
            collider_radius: 0.4,
            start_position: (0.0, 1.0, 0.0),
        }
    }
}

impl PlayerConfig {
    /// Load player config from RON file.
    pub fn load() -> Self {
        let path = "assets/data/player_config.ron";
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded player config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Half-height of the capsule's cylindrical segment for rapier's
    /// `capsule_y`, as a function of the slide state.
    pub fn capsule_half_height(&self, sliding: bool) -> f32 {
        let height = if sliding { self.slide_height } else { self.stand_height };
        (height / 2.0 - self.collider_radius).max(0.0)
    }

    /// How far the capsule center drops when ducking, so the feet stay
    /// planted through the profile change.
    pub fn duck_center_drop(&self) -> f32 {
        (self.stand_height - self.slide_height) / 2.0
    }

    pub fn start_translation(&self) -> Vec3 {
        let (x, y, z) = self.start_position;
        Vec3::new(x, y, z)
    }
}

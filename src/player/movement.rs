//! Runner movement systems.
//!
//! Movement is kinematic: each tick builds a displacement from constant
//! forward speed, stick strafing, and the jump/slide/gravity state, then
//! routes it through Rapier's KinematicCharacterController. The controller
//! resolves collisions and reports ground contact, which is folded back into
//! the motion state the following tick.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::{GameOverEvent, ResetRunEvent};
use crate::input::PadSnapshot;
use crate::track::Hazard;

use super::components::*;

/// Integrate one tick of motion and hand the displacement to the mover.
///
/// With no gamepad connected the whole tick is skipped - the runner does not
/// advance and does not fall. That mirrors the menu dispatch, which also
/// treats a missing pad as "do nothing" rather than neutral input.
pub fn player_movement(
    pad: Res<PadSnapshot>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut query: Query<
        (
            &mut Transform,
            &mut MovementState,
            &mut Collider,
            &mut KinematicCharacterController,
            Option<&KinematicCharacterControllerOutput>,
        ),
        With<Player>,
    >,
) {
    if !pad.connected {
        return;
    }
    let Ok((mut transform, mut state, mut collider, mut controller, output)) =
        query.get_single_mut()
    else {
        return;
    };

    // Ground contact from last tick's move. No output yet on the first tick
    // after spawn; the state starts grounded.
    if let Some(output) = output {
        state.apply_ground_contact(output.grounded, &config);
    }

    let was_sliding = state.is_sliding;
    let velocity = state.integrate(&MotionInput::from_pad(&pad), &config, time.delta_secs());

    if state.is_sliding != was_sliding {
        apply_collider_profile(&mut collider, &mut transform, state.is_sliding, &config);
    }

    controller.translation = Some(velocity * time.delta_secs());
}

/// Swap the capsule between standing and duck profiles.
///
/// The capsule center shifts with the height change so the feet stay on the
/// ground through the transition.
fn apply_collider_profile(
    collider: &mut Collider,
    transform: &mut Transform,
    sliding: bool,
    config: &PlayerConfig,
) {
    *collider = Collider::capsule_y(config.capsule_half_height(sliding), config.collider_radius);
    if sliding {
        transform.translation.y -= config.duck_center_drop();
    } else {
        transform.translation.y += config.duck_center_drop();
    }
}

/// End the run when the mover reports contact with a hazard.
pub fn detect_hazard_contact(
    query: Query<&KinematicCharacterControllerOutput, With<Player>>,
    hazards: Query<(), With<Hazard>>,
    mut game_over: EventWriter<GameOverEvent>,
) {
    let Ok(output) = query.get_single() else {
        return;
    };
    if output
        .collisions
        .iter()
        .any(|contact| hazards.contains(contact.entity))
    {
        game_over.send(GameOverEvent);
    }
}

/// Put the runner back at the start line for a new run.
///
/// Restores position and the standing collider, zeroes velocity, and exits
/// any slide. Safe to fire repeatedly.
pub fn reset_player(
    mut events: EventReader<ResetRunEvent>,
    config: Res<PlayerConfig>,
    mut query: Query<(&mut Transform, &mut MovementState, &mut Collider, &StartPosition), With<Player>>,
) {
    if events.read().next().is_none() {
        return;
    }
    let Ok((mut transform, mut state, mut collider, start)) = query.get_single_mut() else {
        return;
    };

    state.reset();
    transform.translation = start.0;
    *collider = Collider::capsule_y(config.capsule_half_height(false), config.collider_radius);
}

/// Hide the runner while the main menu is up, matching the track.
pub fn hide_player(mut query: Query<&mut Visibility, With<Player>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

/// Show the runner when a run begins.
pub fn show_player(mut query: Query<&mut Visibility, With<Player>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
}

/// Load the runner tuning at startup.
pub fn load_player_config(mut commands: Commands) {
    commands.insert_resource(PlayerConfig::load());
}

/// Spawn the runner with its chase camera.
pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<PlayerConfig>,
) {
    let start = config.start_translation();
    let segment_length = (config.stand_height - 2.0 * config.collider_radius).max(0.0);

    commands
        .spawn((
            Player,
            MovementState::default(),
            StartPosition(start),
            Mesh3d(meshes.add(Capsule3d::new(config.collider_radius, segment_length))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.45, 0.2))),
            Transform::from_translation(start),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(config.capsule_half_height(false), config.collider_radius),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                // Snap to ground when running down slopes
                snap_to_ground: Some(CharacterLength::Absolute(0.3)),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Chase camera, slightly above and behind the runner
            parent.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, 3.0, 6.5)
                    .looking_at(Vec3::new(0.0, 0.5, -4.0), Vec3::Y),
            ));
        });
}

//! Player domain: unit tests for motion integration and reset.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::input::PadSnapshot;

use super::movement::player_movement;
use super::{MotionInput, MovementState, Player, PlayerConfig};

const DT: f32 = 0.02;

fn neutral() -> MotionInput {
    MotionInput::default()
}

fn jump() -> MotionInput {
    MotionInput {
        jump_pressed: true,
        ..Default::default()
    }
}

fn slide() -> MotionInput {
    MotionInput {
        slide_pressed: true,
        ..Default::default()
    }
}

#[test]
fn forward_and_strafe_displacement() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();
    let input = MotionInput {
        strafe: 0.5,
        ..Default::default()
    };

    // forward 10, strafe speed 6 at half deflection, dt 0.1
    let displacement = state.integrate(&input, &config, 0.1) * 0.1;

    assert!((displacement.x - 0.3).abs() < 1e-6);
    assert_eq!(displacement.y, 0.0);
    assert!((displacement.z - (-1.0)).abs() < 1e-6);
    // Grounded with no jump: vertical velocity untouched
    assert_eq!(state.vertical_velocity, 0.0);
    assert!(state.is_grounded);
}

#[test]
fn jump_only_from_the_ground() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    state.integrate(&jump(), &config, DT);
    assert_eq!(state.vertical_velocity, config.jump_force);
    assert!(!state.is_grounded);

    // A second press while airborne has no effect beyond gravity
    let before = state.vertical_velocity;
    state.integrate(&jump(), &config, DT);
    assert!((state.vertical_velocity - (before + config.gravity * DT)).abs() < 1e-6);
}

#[test]
fn gravity_accumulates_while_airborne() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    state.integrate(&jump(), &config, DT);
    let v1 = state.vertical_velocity;
    state.integrate(&neutral(), &config, DT);
    let v2 = state.vertical_velocity;
    state.integrate(&neutral(), &config, DT);
    let v3 = state.vertical_velocity;

    assert!((v2 - (v1 + config.gravity * DT)).abs() < 1e-6);
    assert!((v3 - (v2 + config.gravity * DT)).abs() < 1e-6);
}

#[test]
fn grounded_state_persists_without_contact_signal() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    // No contact reported and no jump: grounded stays set, gravity stays off
    for _ in 0..10 {
        state.integrate(&neutral(), &config, DT);
    }
    assert!(state.is_grounded);
    assert_eq!(state.vertical_velocity, 0.0);
}

#[test]
fn landing_clamps_descent_to_ground_stick() {
    let config = PlayerConfig::default();
    let mut state = MovementState {
        vertical_velocity: -5.0,
        is_grounded: false,
        ..Default::default()
    };

    // No contact: nothing changes
    state.apply_ground_contact(false, &config);
    assert_eq!(state.vertical_velocity, -5.0);
    assert!(!state.is_grounded);

    // Contact while descending: clamp and ground
    state.apply_ground_contact(true, &config);
    assert_eq!(state.vertical_velocity, config.ground_stick_velocity);
    assert!(state.is_grounded);

    // Contact while ascending (jump started this tick): no clamp
    let mut rising = MovementState {
        vertical_velocity: config.jump_force,
        is_grounded: false,
        ..Default::default()
    };
    rising.apply_ground_contact(true, &config);
    assert_eq!(rising.vertical_velocity, config.jump_force);
    assert!(!rising.is_grounded);
}

#[test]
fn slide_invariant_and_duration() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    state.integrate(&slide(), &config, DT);
    assert!(state.is_sliding);

    // slide_duration 0.6 at dt 0.02 exits after 30 ticks, give or take one
    // tick of float accumulation. The entering tick already counts down.
    let mut ticks = 1;
    while state.is_sliding {
        assert!(state.slide_timer > 0.0, "sliding flag must match timer");
        state.integrate(&neutral(), &config, DT);
        ticks += 1;
        assert!(ticks <= 31, "slide never ended");
    }
    assert!(ticks >= 30, "slide ended after only {ticks} ticks");
    assert_eq!(state.slide_timer, 0.0);
}

#[test]
fn slide_keeps_grounded_and_permits_jumping() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    state.integrate(&slide(), &config, DT);
    assert!(state.is_sliding);
    assert!(state.is_grounded, "sliding must not clear grounded");

    // Jump out of the slide; the slide itself keeps counting down
    state.integrate(&jump(), &config, DT);
    assert_eq!(state.vertical_velocity, config.jump_force);
    assert!(!state.is_grounded);
    assert!(state.is_sliding);
}

#[test]
fn slide_is_not_retriggerable_while_active() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    state.integrate(&slide(), &config, DT);
    let timer_after_one_tick = state.slide_timer;

    // Pressing slide again must not refresh the countdown
    state.integrate(&slide(), &config, DT);
    assert!(state.slide_timer < timer_after_one_tick);
}

#[test]
fn slide_requires_ground() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    state.integrate(&jump(), &config, DT);
    state.integrate(&slide(), &config, DT);
    assert!(!state.is_sliding);
    assert_eq!(state.slide_timer, 0.0);
}

#[test]
fn reset_is_idempotent() {
    let config = PlayerConfig::default();
    let mut state = MovementState::default();

    // Get into a messy mid-air mid-slide state
    state.integrate(&slide(), &config, DT);
    state.integrate(&jump(), &config, DT);
    state.integrate(&neutral(), &config, DT);

    state.reset();
    let once = state;
    state.reset();

    assert_eq!(state, once);
    assert_eq!(state, MovementState::default());
    assert_eq!(state.vertical_velocity, 0.0);
    assert!(state.is_grounded);
    assert!(!state.is_sliding);
}

/// Minimal app running only the movement system, no physics step.
fn movement_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<PadSnapshot>();
    app.insert_resource(PlayerConfig::default());
    app.add_systems(Update, player_movement);

    let config = PlayerConfig::default();
    let runner = app
        .world_mut()
        .spawn((
            Player,
            MovementState::default(),
            Transform::from_translation(config.start_translation()),
            Collider::capsule_y(config.capsule_half_height(false), config.collider_radius),
            KinematicCharacterController::default(),
        ))
        .id();
    (app, runner)
}

#[test]
fn disconnected_pad_skips_the_whole_tick() {
    let (mut app, runner) = movement_app();
    let start = app.world().get::<Transform>(runner).unwrap().translation;

    // Hostile input on a disconnected pad must be ignored wholesale: no
    // forward motion, no gravity, no jump, no slide.
    *app.world_mut().resource_mut::<PadSnapshot>() = PadSnapshot {
        connected: false,
        confirm_pressed: true,
        cancel_pressed: true,
        strafe: 1.0,
        ..Default::default()
    };
    app.update();
    app.update();

    let controller = app.world().get::<KinematicCharacterController>(runner).unwrap();
    assert_eq!(controller.translation, None, "no move was handed to the mover");
    let state = app.world().get::<MovementState>(runner).unwrap();
    assert_eq!(*state, MovementState::default());
    let transform = app.world().get::<Transform>(runner).unwrap();
    assert_eq!(transform.translation, start);
}

#[test]
fn connected_pad_hands_a_move_to_the_mover() {
    let (mut app, runner) = movement_app();

    *app.world_mut().resource_mut::<PadSnapshot>() = PadSnapshot {
        connected: true,
        ..Default::default()
    };
    app.update();

    let controller = app.world().get::<KinematicCharacterController>(runner).unwrap();
    assert!(controller.translation.is_some());
}

#[test]
fn capsule_profile_follows_slide_state() {
    let config = PlayerConfig::default();

    // Standing: 2.0 tall capsule with 0.4 radius
    assert!((config.capsule_half_height(false) - 0.6).abs() < 1e-6);
    // Ducking: 0.8 tall, the cylindrical segment collapses entirely
    assert_eq!(config.capsule_half_height(true), 0.0);
    // Center drops so the feet stay planted
    assert!((config.duck_center_drop() - 0.6).abs() < 1e-6);

    let start = config.start_translation();
    assert_eq!(start, Vec3::new(0.0, 1.0, 0.0));
}

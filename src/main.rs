//! Rushline - Entry Point
//!
//! A gamepad-driven endless runner: constant forward motion, strafe between
//! obstacles, jump over barriers, slide under bars.
//!
//! Controls (gamepad):
//! - Left stick: Strafe left/right
//! - A (south): Confirm in menus / Jump in game
//! - B (east): Cancel in menus / Slide in game
//! - Y (north): About / Restart from pause
//! - Start: Pause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rushline".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(rushline::RushlinePlugin)

        .run();
}

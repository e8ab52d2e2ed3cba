//! Track construction: environment root, ground strip, and obstacles.
//!
//! Everything visual about the run lives under a single environment root
//! whose visibility follows the game state: hidden on the main menu, shown
//! for the whole of a run including pause and game over.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::data::{ObstacleKind, ObstaclePlacement, TrackLayout};

/// Root entity for all track geometry. Hidden while on the main menu.
#[derive(Component)]
pub struct EnvironmentRoot;

/// Touching an entity with this marker ends the run.
#[derive(Component)]
pub struct Hazard;

/// Marker for obstacle entities, used to rebuild the course on reset.
#[derive(Component)]
pub struct Obstacle;

/// Obstacle dimensions. A low barrier must be clearable by a jump
/// (apex = jump_force^2 / (2 * |gravity|) = 1.6 with default tuning) and a
/// high bar must pass over the duck capsule (0.8) but not the standing one
/// (2.0).
const OBSTACLE_WIDTH: f32 = 2.4;
const OBSTACLE_DEPTH: f32 = 0.4;
const LOW_BARRIER_HEIGHT: f32 = 0.8;
const HIGH_BAR_CLEARANCE: f32 = 1.2;
const HIGH_BAR_HEIGHT: f32 = 0.8;

/// Build the whole track under a hidden environment root.
pub fn setup_track(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<TrackLayout>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.8, 0.85, 1.0),
        brightness: 300.0,
    });

    let ground_material = materials.add(Color::srgb(0.25, 0.3, 0.35));

    commands
        .spawn((
            EnvironmentRoot,
            Transform::default(),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            // Key light
            parent.spawn((
                DirectionalLight {
                    illuminance: 8000.0,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_rotation(Quat::from_euler(
                    EulerRot::XYZ,
                    -std::f32::consts::FRAC_PI_3,
                    std::f32::consts::FRAC_PI_6,
                    0.0,
                )),
            ));

            // Ground strip. The run goes toward -Z from the start line at
            // z = 0, with a short runway behind it.
            let length = layout.ground_length;
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(layout.ground_width, 0.5, length))),
                MeshMaterial3d(ground_material),
                Transform::from_xyz(0.0, -0.25, -length / 2.0 + 10.0),
                Collider::cuboid(layout.ground_width / 2.0, 0.25, length / 2.0),
                RigidBody::Fixed,
            ));

            for placement in &layout.obstacles {
                spawn_obstacle(parent, &mut meshes, &mut materials, placement);
            }
        });
}

/// Spawn a single obstacle under the environment root.
pub fn spawn_obstacle(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    placement: &ObstaclePlacement,
) {
    let (center_y, height, color) = match placement.kind {
        // On the ground, jump over
        ObstacleKind::LowBarrier => (
            LOW_BARRIER_HEIGHT / 2.0,
            LOW_BARRIER_HEIGHT,
            Color::srgb(0.8, 0.25, 0.2),
        ),
        // Above the track, slide under
        ObstacleKind::HighBar => (
            HIGH_BAR_CLEARANCE + HIGH_BAR_HEIGHT / 2.0,
            HIGH_BAR_HEIGHT,
            Color::srgb(0.85, 0.65, 0.15),
        ),
    };

    parent.spawn((
        Obstacle,
        Hazard,
        Mesh3d(meshes.add(Cuboid::new(OBSTACLE_WIDTH, height, OBSTACLE_DEPTH))),
        MeshMaterial3d(materials.add(color)),
        Transform::from_xyz(placement.lane, center_y, -placement.distance),
        Collider::cuboid(OBSTACLE_WIDTH / 2.0, height / 2.0, OBSTACLE_DEPTH / 2.0),
        RigidBody::Fixed,
    ));
}

/// Hide the track while the main menu is up.
pub fn hide_environment(mut query: Query<&mut Visibility, With<EnvironmentRoot>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

/// Show the track when a run begins. It stays visible through pause and
/// game over; only returning to the main menu hides it again.
pub fn show_environment(mut query: Query<&mut Visibility, With<EnvironmentRoot>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
}

//! Track plugin - layout loading, geometry, visibility, and run reset.

use bevy::prelude::*;

use crate::core::{GameState, ResetRunEvent, TickSet};

use super::data::{load_track_layout, TrackLayout};
use super::spawn::{
    hide_environment, setup_track, show_environment, spawn_obstacle, EnvironmentRoot, Obstacle,
};

const TRACK_LAYOUT_PATH: &str = "assets/data/track_layout.ron";

/// Track plugin - the course the runner plays on.
pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_layout, setup_track).chain())
            .add_systems(OnEnter(GameState::MainMenu), hide_environment)
            .add_systems(OnExit(GameState::MainMenu), show_environment)
            .add_systems(Update, reset_track.in_set(TickSet::Motion));
    }
}

/// Load the track layout, falling back to the built-in course.
fn load_layout(mut commands: Commands) {
    let layout = match load_track_layout(TRACK_LAYOUT_PATH) {
        Ok(layout) => {
            info!("Loaded track layout from {}", TRACK_LAYOUT_PATH);
            layout
        }
        Err(e) => {
            warn!("{}. Using built-in layout.", e);
            TrackLayout::default()
        }
    };
    commands.insert_resource(layout);
}

/// Rebuild the obstacle course for a fresh run.
fn reset_track(
    mut events: EventReader<ResetRunEvent>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<TrackLayout>,
    obstacles: Query<Entity, With<Obstacle>>,
    root: Query<Entity, With<EnvironmentRoot>>,
) {
    if events.read().next().is_none() {
        return;
    }

    for entity in &obstacles {
        commands.entity(entity).despawn_recursive();
    }

    let Ok(root) = root.get_single() else {
        return;
    };
    commands.entity(root).with_children(|parent| {
        for placement in &layout.obstacles {
            spawn_obstacle(parent, &mut meshes, &mut materials, placement);
        }
    });
}

//! Track layout data structures and RON loading.
//!
//! The track is a fixed layout loaded from a data file: a long ground strip
//! and a list of obstacles placed along it. Editing the RON file retunes the
//! course without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::TrackDataError;

/// The kind of obstacle placed on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground; jump over it
    LowBarrier,
    /// Hangs above the track; slide under it
    HighBar,
}

/// One obstacle placed along the run.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ObstaclePlacement {
    pub kind: ObstacleKind,
    /// Distance from the start line along the run direction, in units
    pub distance: f32,
    /// Lateral offset from the track center; positive is right
    #[serde(default)]
    pub lane: f32,
}

fn default_ground_length() -> f32 {
    400.0
}

fn default_ground_width() -> f32 {
    8.0
}

/// Full track description loaded from assets/data/track_layout.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct TrackLayout {
    #[serde(default = "default_ground_length")]
    pub ground_length: f32,
    #[serde(default = "default_ground_width")]
    pub ground_width: f32,
    pub obstacles: Vec<ObstaclePlacement>,
}

impl Default for TrackLayout {
    fn default() -> Self {
        // Built-in fallback course: alternating barrier kinds with enough
        // runway between them to recover from a jump or slide.
        let obstacles = (0..12)
            .map(|i| ObstaclePlacement {
                kind: if i % 2 == 0 {
                    ObstacleKind::LowBarrier
                } else {
                    ObstacleKind::HighBar
                },
                distance: 25.0 + 20.0 * i as f32,
                lane: 0.0,
            })
            .collect();

        Self {
            ground_length: default_ground_length(),
            ground_width: default_ground_width(),
            obstacles,
        }
    }
}

/// Load a track layout from a RON file.
pub fn load_track_layout(path: &str) -> Result<TrackLayout, TrackDataError> {
    let contents = fs::read_to_string(path).map_err(|e| TrackDataError::ReadError {
        path: path.to_string(),
        details: e.to_string(),
    })?;
    ron::from_str(&contents).map_err(|e| TrackDataError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}

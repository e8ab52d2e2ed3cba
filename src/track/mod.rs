//! Track module - course layout, geometry, and environment visibility.

mod data;
mod error;
mod plugin;
mod spawn;

pub use data::{load_track_layout, ObstacleKind, ObstaclePlacement, TrackLayout};
pub use error::TrackDataError;
pub use plugin::TrackPlugin;
pub use spawn::{hide_environment, show_environment, EnvironmentRoot, Hazard, Obstacle};

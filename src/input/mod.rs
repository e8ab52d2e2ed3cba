//! Input module - per-tick gamepad snapshot.

mod pad;
mod plugin;

pub use pad::PadSnapshot;
pub use plugin::InputPlugin;

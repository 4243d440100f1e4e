//! Camera system: viewport snapshots and the view-transition controller.

/// View-transition state machine (presets, perspective toggle, FOV).
pub mod controller;
/// Camera snapshot value types and preset orientations.
pub mod state;

pub use controller::ViewController;
pub use state::{CameraState, Projection, ViewPreset};

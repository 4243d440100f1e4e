use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// View-transition tuning parameters.
pub struct TransitionOptions {
    /// Duration of animated transitions in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub duration_secs: f32,
    /// Whether transitions animate at all; when false they snap
    /// instantly.
    #[schemars(title = "Animate")]
    pub animate: bool,
    /// Easing curve applied to transition progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Near-zero field of view (degrees) used to approximate an
    /// orthographic look while staying in a perspective projection.
    #[schemars(skip)]
    pub isometric_fov: f32,
    /// Target field of view for the widen-FOV action, degrees.
    #[schemars(title = "Wide FOV", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov_wide: f32,
    /// Target field of view for the narrow-FOV action, degrees.
    #[schemars(title = "Narrow FOV", range(min = 5.0, max = 60.0), extend("step" = 1.0))]
    pub fov_narrow: f32,
    /// Camera offset from the origin for the frame-origin shot.
    #[schemars(with = "[f32; 3]")]
    pub octant_offset: Vec3,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_secs: 0.5,
            animate: true,
            easing: EasingFunction::Linear,
            isometric_fov: 0.0125,
            fov_wide: 90.0,
            fov_narrow: 15.0,
            octant_offset: Vec3::new(-10.0, 10.0, -10.0),
        }
    }
}

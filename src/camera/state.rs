//! Camera snapshot value types and preset orientations.

use glam::{EulerRot, Mat3, Quat, Vec3};

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection, approximated by a near-zero field of
    /// view rather than a true orthographic matrix.
    Orthographic,
}

/// Snapshot of a viewport camera.
///
/// A plain value type: the host viewport owns the live camera and
/// exchanges copies of this with the controller. Orientation follows
/// the right-handed convention used throughout the crate: the camera
/// looks along `-Z` and `+Y` is up, so the identity orientation is the
/// front view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// The point the camera orbits and looks toward (not the camera's
    /// own position).
    pub pivot: Vec3,
    /// Camera orientation as a unit quaternion.
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Current projection mode.
    pub projection: Projection,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pivot: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            fov: 60.0,
            projection: Projection::Perspective,
        }
    }
}

impl CameraState {
    /// Direction the camera is looking.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Approximate equality within `epsilon`, for tests and
    /// change-detection. Orientations are compared up to quaternion
    /// double cover (`q` and `-q` are the same rotation).
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.projection == other.projection
            && self.pivot.abs_diff_eq(other.pivot, epsilon)
            && (self.fov - other.fov).abs() <= epsilon
            && self.orientation.dot(other.orientation).abs()
                >= 1.0 - epsilon
    }
}

/// Build a camera orientation looking along `forward` with `up` as the
/// up reference.
///
/// Constructs the right-handed look-at basis (camera `-Z` maps onto
/// `forward`). Degenerate inputs fall back rather than producing NaNs:
/// a zero `forward` yields the identity, and an `up` parallel to
/// `forward` is replaced by an arbitrary perpendicular axis.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let f = forward.normalize_or_zero();
    if f == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let z_axis = -f;
    let mut x_axis = up.cross(z_axis);
    if x_axis.length_squared() < 1e-8 {
        // up is (anti)parallel to forward; pick any perpendicular
        let alt = if f.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        x_axis = alt.cross(z_axis);
    }
    let x_axis = x_axis.normalize();
    let y_axis = z_axis.cross(x_axis);
    Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis)).normalize()
}

/// Named orthographic view presets.
///
/// Each preset carries a fixed orientation and pivot; the controller
/// supplies the near-zero field of view and the projection flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    /// Looking straight down the world `-Y` axis.
    Top,
    /// Looking along world `-Z` (the identity orientation).
    Front,
    /// Looking along world `-X`.
    Side,
}

impl ViewPreset {
    /// The preset's camera orientation.
    #[must_use]
    pub fn orientation(self) -> Quat {
        match self {
            // Straight down; roll chosen by the pitch rotation alone.
            ViewPreset::Top => {
                Quat::from_euler(EulerRot::YXZ, 0.0, -std::f32::consts::FRAC_PI_2, 0.0)
            }
            ViewPreset::Front => Quat::IDENTITY,
            ViewPreset::Side => {
                Quat::from_euler(EulerRot::YXZ, std::f32::consts::FRAC_PI_2, 0.0, 0.0)
            }
        }
    }

    /// The preset's pivot point.
    #[must_use]
    pub fn pivot(self) -> Vec3 {
        Vec3::ZERO
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ViewPreset::Top => "top",
            ViewPreset::Front => "front",
            ViewPreset::Side => "side",
        }
    }
}

/// Default isometric orientation used by the perspective toggle:
/// tilted 30 degrees downward, turned 45 degrees around the up axis.
#[must_use]
pub fn default_isometric_orientation() -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        45.0_f32.to_radians(),
        -30.0_f32.to_radians(),
        0.0,
    )
}

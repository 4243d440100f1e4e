//! Resumable camera view transitions.
//!
//! A [`ViewTransition`] is an explicit interpolation unit: it holds the
//! start and target snapshots plus elapsed/total time, and is advanced
//! by whatever clock the host has (frame delta times in production,
//! synthetic durations in tests). Nothing here blocks or sleeps.

use std::time::Duration;

use crate::animation::easing::EasingFunction;
use crate::camera::state::{CameraState, Projection};

/// An in-flight animated transition between two camera snapshots.
///
/// Orientation interpolates by shortest-path spherical slerp, pivot by
/// linear interpolation, and field of view by scalar interpolation, all
/// over the same eased progress value. The discrete projection flag is
/// *not* interpolated: in-flight samples report the carried projection
/// (normally the start's), and only the exact target snapshot, returned
/// once progress reaches 1, carries the target projection. That keeps a
/// perspective/orthographic switch from popping mid-animation.
#[derive(Debug, Clone)]
pub struct ViewTransition {
    start: CameraState,
    target: CameraState,
    /// Projection reported by in-flight samples.
    carried_projection: Projection,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl ViewTransition {
    /// Create a transition from `start` to `target` over `duration`.
    ///
    /// A zero duration makes the transition complete on its first
    /// advance (an instant snap).
    #[must_use]
    pub fn new(
        start: CameraState,
        target: CameraState,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            target,
            carried_projection: start.projection,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Override the projection reported by in-flight samples.
    ///
    /// Used when a mode flip must happen up front instead of at the
    /// boundary (the frame-origin shot forces perspective immediately).
    #[must_use]
    pub fn forcing_projection(mut self, projection: Projection) -> Self {
        self.carried_projection = projection;
        self
    }

    /// The snapshot this transition started from.
    #[must_use]
    pub fn start(&self) -> &CameraState {
        &self.start
    }

    /// The snapshot this transition ends at.
    #[must_use]
    pub fn target(&self) -> &CameraState {
        &self.target
    }

    /// Advance by a frame's delta time and return the new snapshot.
    pub fn advance(&mut self, dt: Duration) -> CameraState {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.sample(self.progress())
    }

    /// Normalized progress in [0, 1]. Zero-duration transitions are
    /// complete immediately.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the transition has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Interpolated snapshot at normalized progress `t`.
    ///
    /// `t >= 1` returns the target exactly (bit-for-bit), which is the
    /// only sample whose projection flag may differ from the carried
    /// one.
    #[must_use]
    pub fn sample(&self, t: f32) -> CameraState {
        if t >= 1.0 {
            return self.target;
        }
        let eased = self.easing.evaluate(t);
        CameraState {
            pivot: self.start.pivot.lerp(self.target.pivot, eased),
            orientation: self
                .start
                .orientation
                .slerp(self.target.orientation, eased)
                .normalize(),
            fov: self.start.fov + (self.target.fov - self.start.fov) * eased,
            projection: self.carried_projection,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    fn perspective(fov: f32) -> CameraState {
        CameraState {
            fov,
            ..CameraState::default()
        }
    }

    fn transition(
        start: CameraState,
        target: CameraState,
    ) -> ViewTransition {
        ViewTransition::new(
            start,
            target,
            Duration::from_millis(500),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let start = perspective(60.0);
        let target = CameraState {
            pivot: Vec3::new(4.0, 5.0, 6.0),
            orientation: Quat::from_rotation_x(1.1),
            fov: 20.0,
            projection: Projection::Orthographic,
        };
        let t = transition(start, target);

        // t=0 reproduces the start (slerp may wobble by an ulp).
        assert!(t.sample(0.0).abs_diff_eq(&start, 1e-6));
        // t=1 is the target bit-for-bit.
        assert_eq!(t.sample(1.0), target);
        // Overshooting the duration still lands exactly on the target.
        assert_eq!(t.sample(2.5), target);
    }

    #[test]
    fn advance_reaches_target_after_duration() {
        let start = perspective(60.0);
        let target = CameraState {
            fov: 90.0,
            ..start
        };
        let mut t = transition(start, target);

        let mid = t.advance(Duration::from_millis(250));
        assert!((mid.fov - 75.0).abs() < 1e-4);
        assert!(!t.is_complete());

        let end = t.advance(Duration::from_millis(250));
        assert!(t.is_complete());
        assert_eq!(end, target);
    }

    #[test]
    fn projection_flips_only_at_completion() {
        let start = perspective(60.0);
        let target = CameraState {
            projection: Projection::Orthographic,
            fov: 0.0125,
            ..start
        };
        let t = transition(start, target);

        for i in 1..10_u8 {
            let s = t.sample(f32::from(i) / 10.0);
            assert_eq!(s.projection, Projection::Perspective);
        }
        assert_eq!(t.sample(1.0).projection, Projection::Orthographic);
    }

    #[test]
    fn forced_projection_applies_to_in_flight_samples() {
        let start = CameraState {
            projection: Projection::Orthographic,
            ..perspective(0.0125)
        };
        let target = perspective(60.0);
        let t = transition(start, target)
            .forcing_projection(Projection::Perspective);

        assert_eq!(t.sample(0.0).projection, Projection::Perspective);
        assert_eq!(t.sample(0.5).projection, Projection::Perspective);
        assert_eq!(t.sample(1.0).projection, Projection::Perspective);
    }

    #[test]
    fn zero_duration_is_instantly_complete() {
        let start = perspective(60.0);
        let target = CameraState {
            fov: 15.0,
            ..start
        };
        let mut t = ViewTransition::new(
            start,
            target,
            Duration::ZERO,
            EasingFunction::Linear,
        );

        assert!(t.is_complete());
        assert_eq!(t.advance(Duration::from_nanos(1)), target);
    }

    #[test]
    fn orientation_takes_the_short_way_around() {
        // 350 degrees about Y is the same pose as -10 degrees; the
        // halfway sample must sit at -5 degrees, not +175.
        let start = perspective(60.0);
        let target = CameraState {
            orientation: Quat::from_rotation_y(350.0_f32.to_radians()),
            ..start
        };
        let t = transition(start, target);

        let halfway = t.sample(0.5).orientation;
        let expected = Quat::from_rotation_y(-5.0_f32.to_radians());
        assert!(halfway.dot(expected).abs() > 0.9999);
    }

    #[test]
    fn eased_progress_still_hits_endpoints() {
        let start = perspective(0.0);
        let target = CameraState {
            fov: 100.0,
            ..start
        };
        let mut t = ViewTransition::new(
            start,
            target,
            Duration::from_millis(500),
            EasingFunction::SMOOTH,
        );

        // Ease-out: ahead of linear at the halfway point.
        let mid = t.advance(Duration::from_millis(250));
        assert!(mid.fov > 50.0);

        let end = t.advance(Duration::from_millis(250));
        assert_eq!(end, target);
    }
}

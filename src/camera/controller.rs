//! View-transition state machine.
//!
//! [`ViewController`] owns two slots: the saved perspective view (set
//! when leaving perspective mode, consumed when returning to it) and
//! the in-flight [`ViewTransition`]. Starting any operation while a
//! transition is animating replaces it; the superseded transition is
//! simply dropped. The host drives the controller by calling
//! [`tick`](ViewController::tick) once per frame with that frame's
//! delta time and applying each returned snapshot to its viewport.

use std::time::Duration;

use glam::Vec3;

use crate::animation::ViewTransition;
use crate::camera::state::{
    default_isometric_orientation, look_rotation, CameraState, Projection,
    ViewPreset,
};
use crate::input::KeyAction;
use crate::options::TransitionOptions;

/// Animated view-transition controller for a single viewport.
///
/// Invariants it maintains:
///
/// - at most one saved perspective view exists at a time; it is set on
///   the first perspective-to-orthographic entry and cleared when a
///   transition targeting perspective mode completes;
/// - at most one transition is in flight; new requests supersede it;
/// - the projection flag of snapshots returned by
///   [`tick`](Self::tick) changes only on the completing tick, never
///   mid-animation.
#[derive(Debug)]
pub struct ViewController {
    options: TransitionOptions,
    saved: Option<CameraState>,
    active: Option<ViewTransition>,
}

impl ViewController {
    /// Create a controller with the given transition tuning.
    #[must_use]
    pub fn new(options: TransitionOptions) -> Self {
        Self {
            options,
            saved: None,
            active: None,
        }
    }

    /// Current transition tuning.
    #[must_use]
    pub fn options(&self) -> &TransitionOptions {
        &self.options
    }

    /// Replace the transition tuning. Affects subsequent requests, not
    /// the transition currently in flight.
    pub fn set_options(&mut self, options: TransitionOptions) {
        self.options = options;
    }

    /// Dispatch a discrete action against the viewport's current state.
    ///
    /// The single entry point hosts use for key-bound actions; the
    /// individual operations below remain available for programmatic
    /// calls.
    pub fn execute(&mut self, action: KeyAction, current: &CameraState) {
        match action {
            KeyAction::TopView => self.set_preset(current, ViewPreset::Top),
            KeyAction::FrontView => {
                self.set_preset(current, ViewPreset::Front);
            }
            KeyAction::SideView => self.set_preset(current, ViewPreset::Side),
            KeyAction::TogglePerspective => self.toggle_perspective(current),
            KeyAction::LookAtOrigin => self.look_at_origin(current),
            KeyAction::WidenFov => {
                self.change_fov(current, self.options.fov_wide);
            }
            KeyAction::NarrowFov => {
                self.change_fov(current, self.options.fov_narrow);
            }
        }
    }

    /// Animate to an orthographic view preset.
    ///
    /// Entering from perspective mode captures the current view into
    /// the saved slot, once: repeated preset requests while already
    /// orthographic (or while a save exists) leave the slot untouched,
    /// so the eventual toggle restores the view from before the *first*
    /// preset.
    pub fn set_preset(&mut self, current: &CameraState, preset: ViewPreset) {
        self.save_perspective_once(current);
        let target = CameraState {
            pivot: preset.pivot(),
            orientation: preset.orientation(),
            fov: self.options.isometric_fov,
            projection: Projection::Orthographic,
        };
        log::debug!("{} preset requested", preset.name());
        self.begin(*current, target);
    }

    /// Toggle between perspective and the saved/default isometric view.
    ///
    /// From perspective: save the current view (overwriting any prior
    /// save) and animate to the default isometric orientation at the
    /// current pivot. From orthographic with a save: animate back to
    /// the saved view; completion clears the slot and restores
    /// perspective projection. From orthographic with no save: no-op.
    pub fn toggle_perspective(&mut self, current: &CameraState) {
        match (current.projection, self.saved) {
            (Projection::Orthographic, Some(saved)) => {
                log::debug!("restoring saved perspective view");
                self.begin(*current, saved);
            }
            (Projection::Perspective, _) => {
                self.saved = Some(*current);
                let target = CameraState {
                    pivot: current.pivot,
                    orientation: default_isometric_orientation(),
                    fov: self.options.isometric_fov,
                    projection: Projection::Orthographic,
                };
                log::debug!("switching to isometric view");
                self.begin(*current, target);
            }
            (Projection::Orthographic, None) => {
                log::debug!("perspective toggle ignored: no saved view");
            }
        }
    }

    /// Animate the field of view to `target_fov` degrees.
    ///
    /// Only meaningful in perspective mode; a no-op while orthographic.
    /// Orientation, pivot, and projection are left unchanged.
    pub fn change_fov(&mut self, current: &CameraState, target_fov: f32) {
        if current.projection != Projection::Perspective {
            log::debug!("fov change ignored: viewport is orthographic");
            return;
        }
        let target = CameraState {
            fov: target_fov,
            ..*current
        };
        log::debug!("fov {:.1} -> {:.1}", current.fov, target_fov);
        self.begin(*current, target);
    }

    /// Frame the origin from the configured octant offset.
    ///
    /// Forces perspective mode immediately (snapshots report
    /// `Perspective` from the first in-flight frame, with no animation
    /// for that flip alone), then animates to a camera at
    /// `octant_offset` looking at the origin. The target field of view
    /// is the saved view's if a save exists, otherwise the current one;
    /// completion clears the saved slot.
    pub fn look_at_origin(&mut self, current: &CameraState) {
        let offset = self.options.octant_offset;
        let target = CameraState {
            pivot: Vec3::ZERO,
            orientation: look_rotation(-offset, Vec3::Y),
            fov: self.saved.map_or(current.fov, |saved| saved.fov),
            projection: Projection::Perspective,
        };
        log::debug!("framing origin from offset {offset}");
        self.active = Some(
            self.transition(*current, target)
                .forcing_projection(Projection::Perspective),
        );
    }

    /// Advance the in-flight transition by the frame's delta time.
    ///
    /// Returns the snapshot the host should apply to its viewport, or
    /// `None` when nothing is animating. On the completing tick the
    /// returned snapshot is exactly the transition target (the only
    /// point where the projection flag may change), and the saved slot
    /// is cleared if that target is perspective.
    pub fn tick(&mut self, dt: Duration) -> Option<CameraState> {
        let transition = self.active.as_mut()?;
        let state = transition.advance(dt);
        if transition.is_complete() {
            self.finish(state);
        }
        Some(state)
    }

    /// Jump the in-flight transition straight to its end state.
    ///
    /// Returns the final snapshot (with the same completion
    /// bookkeeping as a normal last tick), or `None` if idle.
    pub fn skip(&mut self) -> Option<CameraState> {
        let transition = self.active.take()?;
        let state = transition.sample(1.0);
        self.finish(state);
        Some(state)
    }

    /// Drop the in-flight transition without applying its final state.
    ///
    /// The viewport is left wherever the last tick put it; the saved
    /// slot is untouched, so a later toggle still restores it.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a transition is currently in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The saved perspective view, if one is pending restoration.
    #[must_use]
    pub fn saved_view(&self) -> Option<&CameraState> {
        self.saved.as_ref()
    }

    /// Capture `current` into the saved slot if leaving perspective
    /// mode for the first time.
    fn save_perspective_once(&mut self, current: &CameraState) {
        if current.projection == Projection::Perspective
            && self.saved.is_none()
        {
            log::debug!("captured perspective view (fov {:.1})", current.fov);
            self.saved = Some(*current);
        }
    }

    fn transition(
        &self,
        start: CameraState,
        target: CameraState,
    ) -> ViewTransition {
        let duration = if self.options.animate {
            Duration::from_secs_f32(self.options.duration_secs.max(0.0))
        } else {
            Duration::ZERO
        };
        ViewTransition::new(start, target, duration, self.options.easing)
    }

    fn begin(&mut self, start: CameraState, target: CameraState) {
        // Supersedes any in-flight transition: last request wins.
        self.active = Some(self.transition(start, target));
    }

    fn finish(&mut self, state: CameraState) {
        if state.projection == Projection::Perspective {
            self.saved = None;
        }
        self.active = None;
    }
}

//! Animation primitives: easing curves and resumable view transitions.

pub mod easing;
pub mod transition;

pub use easing::EasingFunction;
pub use transition::ViewTransition;

// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Camera math compares against exact endpoints (0.0, 1.0) on purpose
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Animated viewport camera transitions.
//!
//! Isoview implements the view-shortcut behavior of a 3D editor's scene
//! camera as a host-independent state machine: orthographic view presets
//! (top/front/side), perspective toggling that saves and restores the
//! previous view, animated field-of-view changes, and a fixed-octant
//! framing shot. Transitions are explicit resumable values advanced by
//! per-frame delta times, so the host render loop stays in control and
//! everything is unit-testable with synthetic clocks.
//!
//! # Key entry points
//!
//! - [`camera::ViewController`] - the transition state machine
//! - [`camera::CameraState`] - a value-typed viewport snapshot
//! - [`input::KeyAction`] - the discrete interactive vocabulary
//! - [`options::Options`] - runtime configuration (transition tuning,
//!   key bindings)
//!
//! # Architecture
//!
//! The host owns the real viewport. It feeds the controller the current
//! [`camera::CameraState`] when dispatching an action, then calls
//! [`camera::ViewController::tick`] once per frame with the frame's
//! delta time and applies each returned snapshot back to the viewport.
//! The projection flag only ever changes on the completing tick, so a
//! perspective/orthographic switch never pops mid-animation.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;

//! Systems that run every frame regardless of reveal state.
//!
//! Drives the wobble clock, keeps the camera projection in step with the
//! window, and shows the frame rate on native builds.

/// FPS readout for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub mod fps_tracking;

/// Per-frame clock propagation into the wobble uniform groups.
pub mod frame_driver;

/// Resize handling with aspect guarding and pixel ratio capping.
pub mod viewport;

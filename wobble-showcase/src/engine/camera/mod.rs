//! Damped orbit camera for scene navigation.
//!
//! Pointer input accumulates into pending deltas that are eased into the
//! orbit a fraction at a time each frame.

/// Orbit controller component and its input and damping systems.
pub mod orbit_camera;

//! Scene graph assembly.
//!
//! Eager content is spawned at startup; bundle parts are attached hidden as
//! each glTF arrives and revealed later by the reveal sequence.

/// Camera, light, ground plane and wobble sphere, plus environment map attachment.
pub mod environment;

/// Named bundle parts resolved into placements and spawned hidden.
pub mod model_parts;

/// Full-screen fade overlay and loading indicator.
pub mod overlay;

/// Slot registry for entities other systems address directly.
pub mod scene_state;

/// Welded, tangent-bearing icosphere for the wobble sphere.
pub mod sphere;

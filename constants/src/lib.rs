//! Author-chosen defaults shared by the showcase crates.
//!
//! Everything here can be overridden at runtime by the scene manifest or the
//! tweak panel; these values only seed the first frame.

/// Relative asset paths for the manifest, environment map and model bundles.
pub mod assets;

/// Reveal pacing defaults applied after all assets report loaded.
pub mod reveal;

/// Camera, light, shadow and viewport settings.
pub mod render_settings;

/// Starting wobble and finish parameters for each animated surface.
pub mod surfaces;

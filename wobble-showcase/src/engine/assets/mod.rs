//! Asset descriptions for the showcase scene.
//!
//! Covers the JSON manifest, the handles requested from it, and name-based
//! indexing of loaded glTF bundles.

/// Name-indexed view over a loaded glTF with typed part lookup.
pub mod model_bundle;

/// Handles for the environment map and both model bundles.
pub mod showcase_assets;

/// Scene manifest with asset paths and reveal pacing.
pub mod showcase_manifest;

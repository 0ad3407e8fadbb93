//! Shader-driven surface materials and their tunable parameters.
//!
//! Three wobble surfaces (TV, sphere, monkey) share one material extension
//! whose uniforms are fed from the `ShowcaseTuning` resource every frame.

/// Full-screen fade overlay drawn over the scene until the reveal completes.
pub mod overlay;

/// Material handles per scene role and the per-frame tuning sync.
pub mod surfaces;

/// Uniform groups, surface finishes and colour parameters edited by the tweak panel.
pub mod tuning;

/// Wobble material extension and its prepass (shadow) variant.
pub mod wobble;

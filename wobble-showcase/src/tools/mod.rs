//! Interactive tools layered over the showcase scene.

/// Live parameter panel backed by the tweak registry.
///
/// Collapsible side panel with per-group rows, step buttons and colour swatches.
pub mod tweak_panel;

//! Asset loading pipeline for the showcase scene.
//!
//! Loads the manifest first, then requests the environment map and both model
//! bundles, tracking each item until the whole set has arrived.

/// Asset load polling and the progress/completion events.
pub mod asset_tracker;

/// Scene manifest loading and follow-up asset requests.
///
/// Attaches the environment map to the camera as soon as its handle exists.
pub mod manifest_loader;

/// Per-item load bookkeeping with exactly-once completion.
pub mod progress;

//! Post-load reveal: overlay fade, mesh reveal and panel opening.
//!
//! The timeline itself is a plain state machine; the systems translate its
//! cues into visibility changes, material updates and state transitions.

/// Cue timeline with predecessor gating and the overlay tween.
pub mod sequencer;

/// ECS systems driving the sequencer and applying its cues.
pub mod systems;

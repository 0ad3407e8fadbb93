//! Live parameter panel for the wobble surfaces and the ground plane.
//!
//! The registry is a plain table of (getter, setter, metadata) entries over
//! `ShowcaseTuning`; the bevy_ui panel reads and writes only through it.
//! The panel is spawned once the reveal sequence reaches `Interactive`.

/// Collapse toggle, step buttons and body scrolling.
pub mod interactions;

/// Tweak metadata, accessors and typed get/set with clamping.
pub mod registry;

/// Panel UI state resource and marker components.
pub mod state;

/// Panel spawning, collapse layout and value refresh.
pub mod ui;

use bevy::prelude::*;

use crate::engine::core::app_state::ShowcaseState;

pub use registry::{TweakRegistry, TweakValue};
pub use state::TweakPanelState;

use interactions::{collapse_button_interaction, scroll_panel_body, step_button_interaction};
use ui::{apply_collapse_state, refresh_tweak_values, spawn_tweak_panel};

// Registers the tweak registry, panel resources, and systems.
pub struct TweakPanelPlugin;

impl Plugin for TweakPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TweakRegistry>()
            .init_resource::<TweakPanelState>()
            .add_systems(OnEnter(ShowcaseState::Interactive), spawn_tweak_panel)
            .add_systems(
                Update,
                (
                    collapse_button_interaction,
                    step_button_interaction,
                    scroll_panel_body,
                    apply_collapse_state,
                    refresh_tweak_values,
                )
                    .chain()
                    .run_if(in_state(ShowcaseState::Interactive)),
            );
    }
}

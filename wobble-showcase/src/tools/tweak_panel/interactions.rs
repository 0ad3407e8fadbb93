use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::registry::TweakRegistry;
use super::state::*;
use crate::engine::materials::tuning::ShowcaseTuning;

const SCROLL_LINE_HEIGHT: f32 = 24.0;

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CollapseButton>),
    >,
    mut state: ResMut<TweakPanelState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                state.collapsed = !state.collapsed;
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Each press moves the scalar one step in the button's direction
pub fn step_button_interaction(
    mut q: Query<
        (&Interaction, &StepButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    registry: Res<TweakRegistry>,
    mut tuning: ResMut<ShowcaseTuning>,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                if let Err(err) = registry.nudge(&button.id, &mut tuning, button.direction) {
                    warn!("Tweak step rejected: {}", err);
                }
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

/// Wheel scrolls the panel body while the pointer is over it.
pub fn scroll_panel_body(
    mut scroll_events: EventReader<MouseWheel>,
    mut bodies: Query<(&Interaction, &mut ScrollPosition, &ComputedNode), With<TweakPanelBody>>,
) {
    let mut dy = 0.0;
    for ev in scroll_events.read() {
        dy -= match ev.unit {
            MouseScrollUnit::Line => ev.y * SCROLL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => ev.y,
        };
    }
    if dy == 0.0 {
        return;
    }

    for (interaction, mut scroll, node) in &mut bodies {
        if *interaction == Interaction::None {
            continue;
        }
        let max_offset = (node.content_size().y - node.size().y).max(0.0) * node.inverse_scale_factor();
        scroll.offset_y = (scroll.offset_y + dy).clamp(0.0, max_offset);
    }
}

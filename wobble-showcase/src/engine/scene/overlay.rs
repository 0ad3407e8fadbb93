use bevy::prelude::*;

use crate::engine::loading::asset_tracker::LoadProgressed;
use crate::engine::materials::overlay::{FadeOverlay, OverlayMaterial};
use crate::engine::scene::scene_state::{SceneSlot, ShowcaseScene};

#[derive(Component)]
pub struct LoadingIndicator;

/// Black full-screen overlay plus the loading label drawn above it.
pub fn spawn_overlay(
    mut commands: Commands,
    mut scene: ResMut<ShowcaseScene>,
    mut overlay_materials: ResMut<Assets<OverlayMaterial>>,
) -> Result {
    let overlay = commands
        .spawn((
            Name::new("Fade overlay"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            MaterialNode(overlay_materials.add(OverlayMaterial::opaque())),
            GlobalZIndex(10),
            FadeOverlay::default(),
        ))
        .id();
    scene.bind(SceneSlot::Overlay, overlay)?;

    // Shown on the first progress report.
    let indicator = commands
        .spawn((
            Name::new("Loading indicator"),
            Text::new("Loading"),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                left: Val::Px(24.0),
                ..default()
            },
            GlobalZIndex(11),
            Visibility::Hidden,
            LoadingIndicator,
        ))
        .id();
    scene.bind(SceneSlot::LoadingIndicator, indicator)?;

    Ok(())
}

pub fn update_loading_indicator(
    mut events: EventReader<LoadProgressed>,
    mut indicators: Query<(&mut Text, &mut Visibility), With<LoadingIndicator>>,
) {
    let Some(progress) = events.read().last() else {
        return;
    };

    for (mut text, mut visibility) in &mut indicators {
        *visibility = Visibility::Visible;
        text.0 = format!("Loading {}/{}", progress.loaded, progress.total);
    }
}

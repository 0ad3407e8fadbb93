use bevy::prelude::*;

use super::registry::{Tweak, TweakGroup, TweakKind, TweakRegistry, TweakValue};
use super::state::*;
use crate::engine::materials::tuning::{HexColor, ShowcaseTuning};
use crate::engine::scene::scene_state::{SceneSlot, ShowcaseScene};

const BUTTON_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
const TEXT_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);
const MUTED_TEXT_COLOUR: Color = Color::srgb(0.70, 0.72, 0.76);

pub fn format_value(value: &TweakValue) -> String {
    match value {
        TweakValue::Scalar(v) => format!("{v:.3}"),
        TweakValue::Color(hex) => hex.clone(),
    }
}

fn swatch_colour(value: &TweakValue) -> Color {
    match value {
        TweakValue::Color(hex) => HexColor::parse(hex)
            .map(|colour| colour.color())
            .unwrap_or(Color::BLACK),
        TweakValue::Scalar(_) => Color::BLACK,
    }
}

// Spawns the tweak panel once the scene is interactive
pub fn spawn_tweak_panel(
    mut commands: Commands,
    state: Res<TweakPanelState>,
    registry: Res<TweakRegistry>,
    tuning: Res<ShowcaseTuning>,
    mut scene: ResMut<ShowcaseScene>,
) -> Result {
    let width = if state.collapsed { state.closed_width } else { state.open_width };
    let body_display = if state.collapsed { Display::None } else { Display::Flex };

    let panel = commands
        .spawn((
            TweakPanelRoot,
            Name::new("TweakPanel"),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.92)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                overflow: Overflow::clip(),
                ..default()
            },
            GlobalZIndex(5),
        ))
        .with_children(|parent| {
            spawn_header(parent, &state);

            parent
                .spawn((
                    TweakPanelBody,
                    Name::new("Body"),
                    Interaction::None,
                    ScrollPosition::default(),
                    Node {
                        width: Val::Percent(100.0),
                        flex_grow: 1.0,
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(4.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::scroll_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    for group in TweakGroup::ALL {
                        body.spawn((
                            Text::new(group.title()),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(TEXT_COLOUR),
                            Node {
                                margin: UiRect::top(Val::Px(8.0)),
                                ..default()
                            },
                        ));
                        for tweak in registry.in_group(group) {
                            spawn_row(body, tweak, &tweak.get(&tuning));
                        }
                    }
                });
        })
        .id();

    scene.bind(SceneSlot::Panel, panel)?;
    info!("✓ Tweak panel opened with {} parameters", registry.len());
    Ok(())
}

fn spawn_header(parent: &mut ChildSpawnerCommands, state: &TweakPanelState) {
    let (pad, btn) = if state.collapsed { (4.0, 24.0) } else { (12.0, 28.0) };

    parent
        .spawn((
            HeaderNode,
            Name::new("Header"),
            BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
            Node {
                width: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(pad)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: if state.collapsed {
                    JustifyContent::FlexEnd
                } else {
                    JustifyContent::SpaceBetween
                },
                ..default()
            },
        ))
        .with_children(|header| {
            header.spawn((
                TitleText,
                Name::new("Title"),
                Text::new("Tweaks"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOUR),
                Node {
                    display: if state.collapsed { Display::None } else { Display::Flex },
                    ..default()
                },
            ));

            header
                .spawn((
                    CollapseButton,
                    Name::new("CollapseButton"),
                    Button,
                    BackgroundColor(BUTTON_COLOUR),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Px(btn),
                        height: Val::Px(btn),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|button| {
                    button.spawn((
                        CollapseLabel,
                        Text::new(if state.collapsed { "<" } else { ">" }),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOUR),
                    ));
                });
        });
}

fn spawn_row(body: &mut ChildSpawnerCommands, tweak: &Tweak, value: &TweakValue) {
    body.spawn((
        Name::new(tweak.id.clone()),
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(24.0),
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            ..default()
        },
    ))
    .with_children(|row| {
        row.spawn((
            Text::new(tweak.label),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(MUTED_TEXT_COLOUR),
            Node {
                flex_grow: 1.0,
                ..default()
            },
        ));

        match tweak.kind {
            TweakKind::Scalar { .. } => {
                spawn_step_button(row, &tweak.id, -1.0);
                spawn_value_text(row, &tweak.id, value);
                spawn_step_button(row, &tweak.id, 1.0);
            }
            TweakKind::Color => {
                spawn_value_text(row, &tweak.id, value);
                row.spawn((
                    TweakSwatch {
                        id: tweak.id.clone(),
                    },
                    BackgroundColor(swatch_colour(value)),
                    BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
                    Node {
                        width: Val::Px(20.0),
                        height: Val::Px(20.0),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ));
            }
        }
    });
}

fn spawn_value_text(row: &mut ChildSpawnerCommands, id: &str, value: &TweakValue) {
    row.spawn((
        TweakValueText { id: id.to_string() },
        Text::new(format_value(value)),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(TEXT_COLOUR),
        Node {
            width: Val::Px(64.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
    ));
}

fn spawn_step_button(row: &mut ChildSpawnerCommands, id: &str, direction: f32) {
    row.spawn((
        StepButton {
            id: id.to_string(),
            direction,
        },
        Button,
        BackgroundColor(BUTTON_COLOUR),
        Node {
            width: Val::Px(20.0),
            height: Val::Px(20.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
    ))
    .with_children(|button| {
        button.spawn((
            Text::new(if direction < 0.0 { "-" } else { "+" }),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(TEXT_COLOUR),
        ));
    });
}

pub fn apply_collapse_state(
    state: Res<TweakPanelState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<TweakPanelRoot>>,
        Query<&mut Node, With<TweakPanelBody>>,
        Query<&mut Node, With<HeaderNode>>,
        Query<&mut Node, With<TitleText>>,
        Query<&mut Node, With<CollapseButton>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    if let Ok(mut n) = nodes.p0().single_mut() {
        n.width = Val::Px(if state.collapsed { state.closed_width } else { state.open_width });
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        let pad = if state.collapsed { 4.0 } else { 12.0 };
        n.padding = UiRect::all(Val::Px(pad));
        n.justify_content = if state.collapsed {
            JustifyContent::FlexEnd
        } else {
            JustifyContent::SpaceBetween
        };
    }
    if let Ok(mut n) = nodes.p3().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p4().single_mut() {
        let s = if state.collapsed { 24.0 } else { 28.0 };
        n.width = Val::Px(s);
        n.height = Val::Px(s);
    }
    for mut t in &mut chevrons {
        t.0 = (if state.collapsed { "<" } else { ">" }).to_string();
    }
}

/// Mirrors tuning into the panel; text is only touched when its string changes.
pub fn refresh_tweak_values(
    tuning: Res<ShowcaseTuning>,
    registry: Res<TweakRegistry>,
    mut texts: Query<(&TweakValueText, &mut Text)>,
    mut swatches: Query<(&TweakSwatch, &mut BackgroundColor)>,
) {
    for (value_text, mut text) in &mut texts {
        let Ok(value) = registry.get(&value_text.id, &tuning) else {
            continue;
        };
        let formatted = format_value(&value);
        if text.0 != formatted {
            text.0 = formatted;
        }
    }

    for (swatch, mut background) in &mut swatches {
        let Ok(value) = registry.get(&swatch.id, &tuning) else {
            continue;
        };
        let colour = swatch_colour(&value);
        if background.0 != colour {
            background.0 = colour;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&TweakValue::Scalar(0.5)), "0.500");
        assert_eq!(format_value(&TweakValue::Color("#ff00ff".into())), "#ff00ff");
    }
}

use bevy::prelude::*;

// Resources
#[derive(Resource)]
pub struct TweakPanelState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}

impl Default for TweakPanelState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: 320.0,
            closed_width: 32.0,
        }
    }
}

// Components
#[derive(Component)]
pub struct TweakPanelRoot;
#[derive(Component)]
pub struct TweakPanelBody;
#[derive(Component)]
pub struct HeaderNode;
#[derive(Component)]
pub struct TitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;

/// Text showing the current value of one tweak.
#[derive(Component)]
pub struct TweakValueText {
    pub id: String,
}

/// Colour preview next to a colour tweak.
#[derive(Component)]
pub struct TweakSwatch {
    pub id: String,
}

/// `-` or `+` button; `direction` is the number of steps applied per press.
#[derive(Component)]
pub struct StepButton {
    pub id: String,
    pub direction: f32,
}

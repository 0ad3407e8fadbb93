use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ShowcaseState {
    #[default]
    Loading,
    Revealing,
    Interactive,
}

impl ShowcaseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowcaseState::Loading => "loading",
            ShowcaseState::Revealing => "revealing",
            ShowcaseState::Interactive => "interactive",
        }
    }
}

#[derive(Component)]
pub struct FpsText;

use bevy::prelude::*;
use constants::assets::{ENVIRONMENT_MAP_PATH, MONKEY_BUNDLE_PATH, TV_BUNDLE_PATH};
use constants::reveal::{
    OPEN_PANEL_AFTER, OVERLAY_FADE_DELAY, OVERLAY_FADE_DURATION, REVEAL_MESHES_AFTER,
};
use serde::{Deserialize, Serialize};

/// Paths of every asset the loader requests once the manifest is in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPaths {
    pub environment_map: String,
    pub tv_bundle: String,
    pub monkey_bundle: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            environment_map: ENVIRONMENT_MAP_PATH.to_string(),
            tv_bundle: TV_BUNDLE_PATH.to_string(),
            monkey_bundle: MONKEY_BUNDLE_PATH.to_string(),
        }
    }
}

/// Cosmetic pacing of the reveal, in seconds after load completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTiming {
    pub overlay_fade_delay: f32,
    pub overlay_fade_duration: f32,
    pub reveal_meshes_after: f32,
    pub open_panel_after: f32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            overlay_fade_delay: OVERLAY_FADE_DELAY,
            overlay_fade_duration: OVERLAY_FADE_DURATION,
            reveal_meshes_after: REVEAL_MESHES_AFTER,
            open_panel_after: OPEN_PANEL_AFTER,
        }
    }
}

/// Scene manifest as a Bevy asset. Missing sections fall back to the compiled defaults.
#[derive(Asset, Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypePath, Resource)]
pub struct ShowcaseManifest {
    #[serde(default)]
    pub assets: AssetPaths,
    #[serde(default)]
    pub reveal: RevealTiming,
}

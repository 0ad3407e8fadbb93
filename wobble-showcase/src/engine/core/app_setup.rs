use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::SHADOW_MAP_SIZE;

// Crate engine modules
use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use crate::engine::camera::orbit_camera::{advance_orbit_camera, orbit_camera_input};
use crate::engine::core::app_state::ShowcaseState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::asset_tracker::{
    AssetsLoaded, LoadProgressed, begin_reveal_on_load, track_asset_loading,
};
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::materials::overlay::OverlayMaterial;
use crate::engine::materials::surfaces::sync_surface_materials;
use crate::engine::materials::tuning::ShowcaseTuning;
use crate::engine::materials::wobble::WobbleMaterial;
use crate::engine::reveal::sequencer::RevealSequencer;
use crate::engine::reveal::systems::{
    RevealCueFired, animate_overlay_fade, apply_reveal_cues, drive_reveal_sequence, start_reveal,
};
use crate::engine::scene::environment::setup_scene;
use crate::engine::scene::model_parts::place_model_parts;
use crate::engine::scene::overlay::{spawn_overlay, update_loading_indicator};
use crate::engine::scene::scene_state::ShowcaseScene;
use crate::engine::systems::frame_driver::advance_wobble_time;
use crate::engine::systems::viewport::apply_viewport_resize;
// Crate tools
use crate::tools::tweak_panel::TweakPanelPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

const LOG_FILTER: &str = "wgpu=error,naga=warn,wobble_showcase=debug";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<ShowcaseState>()
        .add_plugins(MaterialPlugin::<WobbleMaterial>::default())
        .add_plugins(UiMaterialPlugin::<OverlayMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ShowcaseManifest as a loadable asset type from `.manifest.json` files.
        .add_plugins(JsonAssetPlugin::<ShowcaseManifest>::new(&["manifest.json"]))
        .add_plugins(TweakPanelPlugin)
        .insert_resource(DirectionalLightShadowMap {
            size: SHADOW_MAP_SIZE,
        });

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ShowcaseAssets>()
        .init_resource::<ShowcaseScene>()
        .init_resource::<ShowcaseTuning>()
        .init_resource::<RevealSequencer>()
        .add_event::<LoadProgressed>()
        .add_event::<AssetsLoaded>()
        .add_event::<RevealCueFired>();

    // State-based system scheduling
    app.add_systems(Startup, (setup_scene, spawn_overlay, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                track_asset_loading,
                update_loading_indicator,
                begin_reveal_on_load,
            )
                .chain()
                .run_if(in_state(ShowcaseState::Loading)),
        )
        // Bundles are placed whenever they arrive; reveal waits on them.
        .add_systems(Update, place_model_parts)
        .add_systems(OnEnter(ShowcaseState::Revealing), start_reveal)
        .add_systems(
            Update,
            (drive_reveal_sequence, apply_reveal_cues, animate_overlay_fade)
                .chain()
                .run_if(not(in_state(ShowcaseState::Loading))),
        );

    // Per-frame driver, every state
    app.add_systems(
        Update,
        (
            advance_wobble_time,
            orbit_camera_input,
            advance_orbit_camera,
            sync_surface_materials,
            apply_viewport_resize,
        )
            .chain(),
    );

    // Add the FPS overlay only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}

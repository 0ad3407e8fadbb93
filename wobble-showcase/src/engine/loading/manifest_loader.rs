use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::assets::MANIFEST_PATH;

use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::reveal::sequencer::RevealSequencer;
use crate::engine::scene::environment::{ShowcaseCamera, attach_environment_map};

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ShowcaseManifest>>,
    failure_reported: bool,
}

impl ManifestLoader {
    /// True on the first call only, so a failed manifest is logged once.
    pub fn report_failure(&mut self) -> bool {
        !std::mem::replace(&mut self.failure_reported, true)
    }
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading manifest from: {}", MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Once the manifest is parsed, requests the environment map and both model bundles.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    mut manifest_loader: ResMut<ManifestLoader>,
    mut assets: ResMut<ShowcaseAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ShowcaseManifest>>,
    cameras: Query<Entity, With<ShowcaseCamera>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(handle) = manifest_loader.handle.clone() else {
        return;
    };
    let Some(manifest) = manifests.get(&handle) else {
        // Nothing else loads without the manifest; the overlay stays up.
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
            if manifest_loader.report_failure() {
                error!("Failed to load manifest {}: {}", MANIFEST_PATH, err);
            }
        }
        return;
    };

    info!("✓ Manifest loaded");
    loading_progress.manifest_loaded = true;
    commands.insert_resource(manifest.clone());
    commands.insert_resource(RevealSequencer::new(manifest.reveal));

    let paths = &manifest.assets;
    assets.environment_map = asset_server.load(paths.environment_map.clone());
    assets.tv_bundle = asset_server.load(paths.tv_bundle.clone());
    assets.monkey_bundle = asset_server.load(paths.monkey_bundle.clone());

    for (label, path, id) in [
        (
            "Environment map",
            &paths.environment_map,
            assets.environment_map.id().untyped(),
        ),
        ("TV bundle", &paths.tv_bundle, assets.tv_bundle.id().untyped()),
        (
            "Monkey bundle",
            &paths.monkey_bundle,
            assets.monkey_bundle.id().untyped(),
        ),
    ] {
        if loading_progress.request(label, path) {
            info!("  {}: {}", label, path);
            assets.tracked.push((path.clone(), id));
        } else {
            warn!("Ignoring duplicate load request for {}", path);
        }
    }

    for camera in &cameras {
        attach_environment_map(&mut commands, camera, assets.environment_map.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_failure_reported_once() {
        let mut loader = ManifestLoader::default();
        assert!(loader.report_failure());
        assert!(!loader.report_failure());
        assert!(!loader.report_failure());
    }
}

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::core::app_state::ShowcaseState;
use crate::engine::loading::progress::LoadingProgress;

/// Sent once per item as it finishes loading.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LoadProgressed {
    pub loaded: usize,
    pub total: usize,
}

/// Sent exactly once, when every requested item has loaded.
#[derive(Event, Debug, Clone, Copy)]
pub struct AssetsLoaded;

/// Where one tracked item stands according to the asset server.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemStatus {
    Pending,
    Loaded,
    Failed(String),
}

impl ItemStatus {
    pub fn of(asset_server: &AssetServer, id: UntypedAssetId) -> Self {
        if asset_server.is_loaded_with_dependencies(id) {
            return ItemStatus::Loaded;
        }
        match asset_server.get_load_state(id) {
            Some(LoadState::Failed(err)) => ItemStatus::Failed(err.to_string()),
            _ => ItemStatus::Pending,
        }
    }
}

/// Folds one round of item statuses into the bookkeeping.
///
/// Returns the progress reports produced this round and whether loading
/// completed this round. A failed item is logged on its first report only and
/// keeps completion from ever firing.
pub fn poll_tracked(
    progress: &mut LoadingProgress,
    tracked: &[(String, UntypedAssetId)],
    mut status: impl FnMut(&str, UntypedAssetId) -> ItemStatus,
) -> (Vec<LoadProgressed>, bool) {
    let mut reports = Vec::new();

    for (path, id) in tracked {
        match status(path, *id) {
            ItemStatus::Loaded => {
                if let Some((loaded, total)) = progress.mark_loaded(path) {
                    info!("✓ Loaded {} ({}/{})", path, loaded, total);
                    reports.push(LoadProgressed { loaded, total });
                }
            }
            ItemStatus::Failed(err) => {
                if progress.mark_failed(path) {
                    error!("Failed to load {}: {}", path, err);
                }
            }
            ItemStatus::Pending => {}
        }
    }

    let completed = progress.take_completion();
    (reports, completed)
}

// Check if all requested assets are loaded
pub fn track_asset_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<ShowcaseAssets>,
    asset_server: Res<AssetServer>,
    mut progressed: EventWriter<LoadProgressed>,
    mut completed: EventWriter<AssetsLoaded>,
) {
    if !loading_progress.manifest_loaded {
        return;
    }

    let (reports, done) = poll_tracked(&mut loading_progress, &assets.tracked, |_, id| {
        ItemStatus::of(&asset_server, id)
    });
    for report in reports {
        progressed.write(report);
    }
    if done {
        completed.write(AssetsLoaded);
    }
}

/// Completion anchors the reveal.
pub fn begin_reveal_on_load(
    mut events: EventReader<AssetsLoaded>,
    mut next_state: ResMut<NextState<ShowcaseState>>,
) {
    if events.read().last().is_some() {
        info!("→ All assets loaded, transitioning to Revealing state");
        next_state.set(ShowcaseState::Revealing);
    }
}

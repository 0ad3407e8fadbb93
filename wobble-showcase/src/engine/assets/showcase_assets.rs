use bevy::asset::UntypedAssetId;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Handles for everything requested after the manifest arrives.
#[derive(Resource, Default)]
pub struct ShowcaseAssets {
    pub environment_map: Handle<Image>,
    pub tv_bundle: Handle<Gltf>,
    pub monkey_bundle: Handle<Gltf>,
    /// Request path and asset id of each tracked load.
    pub tracked: Vec<(String, UntypedAssetId)>,
    pub tv_placed: bool,
    pub monkey_placed: bool,
}

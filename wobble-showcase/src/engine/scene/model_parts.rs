use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use constants::assets::{SCREEN_PART, SNICKERS_PART, TV_PART};
use constants::render_settings::{MONKEY_POSITION, TV_POSITION};

use crate::engine::assets::model_bundle::{BundleIndex, BundlePart};
use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::materials::surfaces::{MaterialRole, SurfaceMaterial, SurfaceMaterials};
use crate::engine::scene::scene_state::{RevealTarget, SceneSlot, ShowcaseScene};
use crate::errors::ShowcaseError;

/// Everything needed to spawn one bundle part, decided before touching the world.
#[derive(Debug, Clone)]
pub struct PartPlacement {
    pub name: String,
    pub slot: SceneSlot,
    pub role: MaterialRole,
    pub meshes: Vec<Handle<Mesh>>,
    pub transform: Transform,
    pub visibility: Visibility,
}

impl PartPlacement {
    fn from_part(part: &BundlePart, slot: SceneSlot, role: MaterialRole, offset: Vec3) -> Self {
        let mut transform = part.transform;
        transform.translation += offset;

        Self {
            name: part.name.clone(),
            slot,
            role,
            meshes: part.meshes.clone(),
            transform,
            visibility: Visibility::Hidden,
        }
    }
}

/// Resolves the three named TV children. A missing name is an error, not a skip.
pub fn plan_tv_parts(bundle: &BundleIndex, offset: Vec3) -> Result<Vec<PartPlacement>, ShowcaseError> {
    [
        (TV_PART, SceneSlot::Tv, MaterialRole::WobbleTv),
        (SCREEN_PART, SceneSlot::Screen, MaterialRole::Screen),
        (SNICKERS_PART, SceneSlot::Snickers, MaterialRole::Snickers),
    ]
    .into_iter()
    .map(|(name, slot, role)| {
        bundle
            .part(name)
            .map(|part| PartPlacement::from_part(part, slot, role, offset))
    })
    .collect()
}

/// The monkey bundle's first mesh node carries the head.
pub fn plan_monkey_parts(
    bundle: &BundleIndex,
    offset: Vec3,
) -> Result<Vec<PartPlacement>, ShowcaseError> {
    let part = bundle.first_part()?;
    Ok(vec![PartPlacement::from_part(
        part,
        SceneSlot::Monkey,
        MaterialRole::WobbleMonkey,
        offset,
    )])
}

fn spawn_placement(
    commands: &mut Commands,
    materials: &SurfaceMaterials,
    placement: &PartPlacement,
) -> Entity {
    let material = materials.for_role(placement.role);

    commands
        .spawn((
            Name::new(placement.name.clone()),
            placement.transform,
            placement.visibility,
            RevealTarget::default(),
        ))
        .with_children(|parent| {
            for mesh in &placement.meshes {
                match &material {
                    SurfaceMaterial::Wobble(handle) => {
                        parent.spawn((Mesh3d(mesh.clone()), MeshMaterial3d(handle.clone())));
                    }
                    SurfaceMaterial::Standard(handle) => {
                        parent.spawn((Mesh3d(mesh.clone()), MeshMaterial3d(handle.clone())));
                    }
                }
            }
        })
        .id()
}

fn spawn_placements(
    commands: &mut Commands,
    scene: &mut ShowcaseScene,
    materials: &SurfaceMaterials,
    placements: &[PartPlacement],
) -> Result<(), ShowcaseError> {
    for placement in placements {
        let entity = spawn_placement(commands, materials, placement);
        scene.bind(placement.slot, entity)?;
        info!("Placed '{}' as {:?} (hidden until reveal)", placement.name, placement.slot);
    }
    Ok(())
}

/// Attaches bundle parts as each glTF becomes available.
pub fn place_model_parts(
    mut commands: Commands,
    mut assets: ResMut<ShowcaseAssets>,
    mut scene: ResMut<ShowcaseScene>,
    materials: Option<Res<SurfaceMaterials>>,
    gltfs: Res<Assets<Gltf>>,
    gltf_nodes: Res<Assets<GltfNode>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
) -> Result {
    let Some(materials) = materials else {
        return Ok(());
    };

    if !assets.tv_placed {
        if let Some(gltf) = gltfs.get(&assets.tv_bundle) {
            let bundle = BundleIndex::from_gltf("tv", gltf, &gltf_nodes, &gltf_meshes);
            let placements = plan_tv_parts(&bundle, TV_POSITION)?;
            spawn_placements(&mut commands, &mut scene, &materials, &placements)?;
            assets.tv_placed = true;
        }
    }

    if !assets.monkey_placed {
        if let Some(gltf) = gltfs.get(&assets.monkey_bundle) {
            let bundle = BundleIndex::from_gltf("monkey", gltf, &gltf_nodes, &gltf_meshes);
            let placements = plan_monkey_parts(&bundle, MONKEY_POSITION)?;
            spawn_placements(&mut commands, &mut scene, &materials, &placements)?;
            assets.monkey_placed = true;
        }
    }

    Ok(())
}

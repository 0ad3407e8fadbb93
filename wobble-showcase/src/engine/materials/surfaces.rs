use bevy::prelude::*;
use constants::surfaces::{SCREEN_TINT, SNICKERS_TINT};

use crate::engine::materials::tuning::{HexColor, ShowcaseTuning};
use crate::engine::materials::wobble::{
    WobbleMaterial, apply_surface_tuning, create_wobble_material,
};

/// Which material a scene part receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialRole {
    WobbleTv,
    WobbleSphere,
    WobbleMonkey,
    Plane,
    Screen,
    Snickers,
}

pub enum SurfaceMaterial {
    Wobble(Handle<WobbleMaterial>),
    Standard(Handle<StandardMaterial>),
}

/// Material handles shared by every entity of a role.
#[derive(Resource, Debug, Clone)]
pub struct SurfaceMaterials {
    pub tv: Handle<WobbleMaterial>,
    pub sphere: Handle<WobbleMaterial>,
    pub monkey: Handle<WobbleMaterial>,
    pub plane: Handle<StandardMaterial>,
    pub screen: Handle<StandardMaterial>,
    pub snickers: Handle<StandardMaterial>,
}

impl SurfaceMaterials {
    pub fn create(
        tuning: &ShowcaseTuning,
        wobble_materials: &mut Assets<WobbleMaterial>,
        standard_materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        let mut plane = StandardMaterial::default();
        tuning.plane.apply_to(&mut plane);

        Self {
            tv: wobble_materials.add(create_wobble_material(&tuning.tv)),
            sphere: wobble_materials.add(create_wobble_material(&tuning.sphere)),
            monkey: wobble_materials.add(create_wobble_material(&tuning.monkey)),
            plane: standard_materials.add(plane),
            screen: standard_materials.add(transmissive_material(SCREEN_TINT, 1.0, 0.05, 0.2)),
            snickers: standard_materials.add(transmissive_material(SNICKERS_TINT, 0.6, 0.4, 0.5)),
        }
    }

    pub fn for_role(&self, role: MaterialRole) -> SurfaceMaterial {
        match role {
            MaterialRole::WobbleTv => SurfaceMaterial::Wobble(self.tv.clone()),
            MaterialRole::WobbleSphere => SurfaceMaterial::Wobble(self.sphere.clone()),
            MaterialRole::WobbleMonkey => SurfaceMaterial::Wobble(self.monkey.clone()),
            MaterialRole::Plane => SurfaceMaterial::Standard(self.plane.clone()),
            MaterialRole::Screen => SurfaceMaterial::Standard(self.screen.clone()),
            MaterialRole::Snickers => SurfaceMaterial::Standard(self.snickers.clone()),
        }
    }
}

fn transmissive_material(
    tint: &str,
    transmission: f32,
    roughness: f32,
    thickness: f32,
) -> StandardMaterial {
    let base_color = HexColor::parse(tint)
        .map(|colour| colour.color())
        .unwrap_or(Color::WHITE);

    StandardMaterial {
        base_color,
        specular_transmission: transmission,
        perceptual_roughness: roughness,
        thickness,
        ior: 1.5,
        ..default()
    }
}

/// Pushes the tuning resource into material assets. Runs every frame since `time` always moves.
pub fn sync_surface_materials(
    tuning: Res<ShowcaseTuning>,
    materials: Option<Res<SurfaceMaterials>>,
    mut wobble_materials: ResMut<Assets<WobbleMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(materials) = materials else {
        return;
    };
    if !tuning.is_changed() {
        return;
    }

    for (handle, surface) in [
        (&materials.tv, &tuning.tv),
        (&materials.sphere, &tuning.sphere),
        (&materials.monkey, &tuning.monkey),
    ] {
        if let Some(material) = wobble_materials.get_mut(handle) {
            apply_surface_tuning(material, surface);
        }
    }

    if let Some(plane) = standard_materials.get_mut(&materials.plane) {
        tuning.plane.apply_to(plane);
    }
}

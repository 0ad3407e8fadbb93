use bevy::core_pipeline::Skybox;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START, ENVIRONMENT_INTENSITY,
    LIGHT_ILLUMINANCE, LIGHT_POSITION, PLANE_POSITION, PLANE_SIZE, SHADOW_DEPTH_BIAS,
    SHADOW_MAXIMUM_DISTANCE, SHADOW_NORMAL_BIAS, SKYBOX_BRIGHTNESS, SPHERE_POSITION,
    SPHERE_RADIUS, SPHERE_SUBDIVISIONS,
};

use crate::engine::camera::orbit_camera::OrbitController;
use crate::engine::materials::surfaces::SurfaceMaterials;
use crate::engine::materials::tuning::ShowcaseTuning;
use crate::engine::materials::wobble::WobbleMaterial;
use crate::engine::scene::scene_state::{SceneSlot, ShowcaseScene};
use crate::engine::scene::sphere::{WobbleSphere, create_sphere_mesh};

#[derive(Component)]
pub struct ShowcaseCamera;

/// Spawns everything that does not wait on a download: materials, plane, sphere, light, camera.
pub fn setup_scene(
    mut commands: Commands,
    mut scene: ResMut<ShowcaseScene>,
    tuning: Res<ShowcaseTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut wobble_materials: ResMut<Assets<WobbleMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
) -> Result {
    let materials = SurfaceMaterials::create(&tuning, &mut wobble_materials, &mut standard_materials);

    let plane = commands
        .spawn((
            Name::new("Ground plane"),
            Mesh3d(meshes.add(Plane3d::default().mesh().size(PLANE_SIZE, PLANE_SIZE))),
            MeshMaterial3d(materials.plane.clone()),
            Transform::from_translation(PLANE_POSITION),
        ))
        .id();
    scene.bind(SceneSlot::Plane, plane)?;

    let sphere_mesh = create_sphere_mesh(SPHERE_RADIUS, SPHERE_SUBDIVISIONS)?;
    let sphere = commands
        .spawn((
            Name::new("Wobble sphere"),
            Mesh3d(meshes.add(sphere_mesh)),
            MeshMaterial3d(materials.sphere.clone()),
            Transform::from_translation(SPHERE_POSITION),
            WobbleSphere,
        ))
        .id();
    scene.bind(SceneSlot::Sphere, sphere)?;

    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);

    commands.insert_resource(materials);
    info!("✓ Eager scene content spawned");
    Ok(())
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        Name::new("Key light"),
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            shadow_depth_bias: SHADOW_DEPTH_BIAS,
            shadow_normal_bias: SHADOW_NORMAL_BIAS,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        // A single cascade keeps the whole scene inside one shadow map.
        CascadeShadowConfigBuilder {
            num_cascades: 1,
            maximum_distance: SHADOW_MAXIMUM_DISTANCE,
            ..default()
        }
        .build(),
    ));
}

fn spawn_camera(commands: &mut Commands) {
    let controller = OrbitController::new(CAMERA_START, Vec3::ZERO);

    commands.spawn((
        Name::new("Showcase camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        controller.transform(),
        controller,
        ShowcaseCamera,
    ));
}

/// Uses one cubemap for both the visible background and image-based lighting.
pub fn attach_environment_map(commands: &mut Commands, camera: Entity, cubemap: Handle<Image>) {
    commands.entity(camera).insert((
        Skybox {
            image: cubemap.clone(),
            brightness: SKYBOX_BRIGHTNESS,
            rotation: Quat::IDENTITY,
        },
        EnvironmentMapLight {
            diffuse_map: cubemap.clone(),
            specular_map: cubemap,
            intensity: ENVIRONMENT_INTENSITY,
            ..default()
        },
    ));
}

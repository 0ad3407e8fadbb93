use bevy::{
    pbr::{ExtendedMaterial, MaterialExtension, MaterialExtensionKey, MaterialExtensionPipeline},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::{MeshVertexBufferLayout, MeshVertexBufferLayoutRef, MissingVertexAttributeError},
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType,
            SpecializedMeshPipelineError, VertexBufferLayout,
        },
    },
};
use constants::assets::{WOBBLE_PREPASS_SHADER_PATH, WOBBLE_SHADER_PATH};

use crate::engine::materials::tuning::SurfaceTuning;

/// Prepass vertex input slot the prepass shader reads the normal from.
const PREPASS_NORMAL_LOCATION: u32 = 3;
const PREPASS_NORMAL_DEF: &str = "WOBBLE_PREPASS_NORMAL";

/// Wobble surface: bevy's PBR material with a displacing vertex stage.
pub type WobbleMaterial = ExtendedMaterial<StandardMaterial, WobbleExtension>;

/// GPU layout of one uniform group, mirrored by `WobbleUniform` in the WGSL.
#[derive(Debug, Clone, Copy, Default, PartialEq, ShaderType)]
pub struct WobbleUniform {
    pub position_frequency: f32,
    pub time_frequency: f32,
    pub strength: f32,
    pub warp_position_frequency: f32,
    pub warp_time_frequency: f32,
    pub warp_strength: f32,
    pub time: f32,
    pub color_a: Vec4,
    pub color_b: Vec4,
}

/// Extension bound at slot 100 so it never collides with `StandardMaterial` bindings.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct WobbleExtension {
    #[uniform(100)]
    pub uniforms: WobbleUniform,
}

impl MaterialExtension for WobbleExtension {
    fn vertex_shader() -> ShaderRef {
        WOBBLE_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        WOBBLE_SHADER_PATH.into()
    }

    // Shadow and depth passes displace with the same noise so shadows track the silhouette.
    fn prepass_vertex_shader() -> ShaderRef {
        WOBBLE_PREPASS_SHADER_PATH.into()
    }

    // Shadow pipelines drop the normal attribute; the displacement needs it.
    fn specialize(
        _pipeline: &MaterialExtensionPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialExtensionKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        if !descriptor
            .vertex
            .shader_defs
            .contains(&"PREPASS_PIPELINE".into())
        {
            return Ok(());
        }

        if let Some(buffer) = descriptor.vertex.buffers.first_mut() {
            if ensure_prepass_normal(buffer, &layout.0)? {
                descriptor.vertex.shader_defs.push(PREPASS_NORMAL_DEF.into());
            }
        }
        Ok(())
    }
}

/// Adds the mesh normal to a prepass vertex buffer layout unless it is already there.
///
/// Returns whether the layout ends up carrying a normal; meshes without one
/// leave the layout untouched.
pub fn ensure_prepass_normal(
    buffer: &mut VertexBufferLayout,
    mesh_layout: &MeshVertexBufferLayout,
) -> Result<bool, MissingVertexAttributeError> {
    if buffer
        .attributes
        .iter()
        .any(|attribute| attribute.shader_location == PREPASS_NORMAL_LOCATION)
    {
        return Ok(true);
    }
    if !mesh_layout.contains(Mesh::ATTRIBUTE_NORMAL.id) {
        return Ok(false);
    }

    let normal = mesh_layout
        .get_layout(&[Mesh::ATTRIBUTE_NORMAL.at_shader_location(PREPASS_NORMAL_LOCATION)])?;
    buffer.attributes.extend(normal.attributes);
    Ok(true)
}

pub fn create_wobble_material(surface: &SurfaceTuning) -> WobbleMaterial {
    let mut base = StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    };
    surface.finish.apply_to(&mut base);

    ExtendedMaterial {
        base,
        extension: WobbleExtension {
            uniforms: surface.wobble.uniform(),
        },
    }
}

/// Copies tuning into an existing material asset.
pub fn apply_surface_tuning(material: &mut WobbleMaterial, surface: &SurfaceTuning) {
    surface.finish.apply_to(&mut material.base);
    material.extension.uniforms = surface.wobble.uniform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::materials::tuning::ShowcaseTuning;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::mesh::{MeshVertexBufferLayouts, PrimitiveTopology};
    use bevy::render::render_resource::VertexFormat;

    fn shadow_layout(mesh: &Mesh) -> (MeshVertexBufferLayoutRef, VertexBufferLayout) {
        let layout = mesh.get_mesh_vertex_buffer_layout(&mut MeshVertexBufferLayouts::default());
        let shadow = layout
            .0
            .get_layout(&[Mesh::ATTRIBUTE_POSITION.at_shader_location(0)])
            .unwrap();
        (layout, shadow)
    }

    #[test]
    fn test_shadow_layout_gains_mesh_normal() {
        let mesh = Sphere::new(1.0).mesh().uv(8, 6);
        let (layout, mut shadow) = shadow_layout(&mesh);
        let expected = layout
            .0
            .get_layout(&[Mesh::ATTRIBUTE_NORMAL.at_shader_location(3)])
            .unwrap()
            .attributes[0];

        assert!(ensure_prepass_normal(&mut shadow, &layout.0).unwrap());
        assert!(ensure_prepass_normal(&mut shadow, &layout.0).unwrap());

        let normals: Vec<_> = shadow
            .attributes
            .iter()
            .filter(|attribute| attribute.shader_location == 3)
            .collect();
        assert_eq!(normals.len(), 1);
        assert_eq!(normals[0].format, VertexFormat::Float32x3);
        assert_eq!(normals[0].offset, expected.offset);
        assert_eq!(shadow.array_stride, layout.0.layout().array_stride);
    }

    #[test]
    fn test_mesh_without_normals_keeps_layout() {
        let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32, 0.0, 0.0]; 3]);
        let (layout, mut shadow) = shadow_layout(&mesh);
        let before = shadow.attributes.clone();

        assert!(!ensure_prepass_normal(&mut shadow, &layout.0).unwrap());
        assert_eq!(shadow.attributes, before);
    }

    #[test]
    fn test_apply_surface_tuning_copies_time_and_finish() {
        let mut tuning = ShowcaseTuning::default();
        let mut material = create_wobble_material(&tuning.tv);

        tuning.set_time(3.5);
        tuning.tv.finish.roughness = 0.1;
        apply_surface_tuning(&mut material, &tuning.tv);

        assert_eq!(material.extension.uniforms.time, 3.5);
        assert_eq!(material.base.perceptual_roughness, 0.1);
    }
}

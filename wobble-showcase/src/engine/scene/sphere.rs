use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, VertexAttributeValues};

use crate::errors::ShowcaseError;

const WELD_PRECISION: f32 = 1.0e4;

#[derive(Component)]
pub struct WobbleSphere;

/// Icosphere prepared for the wobble shader, which needs tangents to displace along.
pub fn create_sphere_mesh(radius: f32, subdivisions: u32) -> Result<Mesh, ShowcaseError> {
    let mut mesh = Sphere::new(radius)
        .mesh()
        .ico(subdivisions)
        .map_err(|err| ShowcaseError::Icosphere(err.to_string()))?;

    let merged = weld_vertices(&mut mesh)?;
    debug!("Sphere welded: {} duplicate vertices merged", merged);

    mesh.generate_tangents()?;
    Ok(mesh)
}

type WeldKey = [i32; 8];

fn quantise(values: &[f32]) -> impl Iterator<Item = i32> + '_ {
    values.iter().map(|v| (v * WELD_PRECISION).round() as i32)
}

/// Merges vertices whose position, normal and uv agree after quantisation and
/// rewrites the index buffer. Returns how many vertices were removed.
///
/// Attributes other than position/normal/uv are dropped; tangents are expected
/// to be generated afterwards.
pub fn weld_vertices(mesh: &mut Mesh) -> Result<usize, ShowcaseError> {
    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        return Err(ShowcaseError::MeshAttribute("position"));
    };
    let Some(VertexAttributeValues::Float32x3(normals)) = mesh.attribute(Mesh::ATTRIBUTE_NORMAL)
    else {
        return Err(ShowcaseError::MeshAttribute("normal"));
    };
    let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0) else {
        return Err(ShowcaseError::MeshAttribute("uv"));
    };

    let mut lookup: HashMap<WeldKey, u32> = HashMap::with_capacity(positions.len());
    let mut remap = Vec::with_capacity(positions.len());
    let mut welded_positions = Vec::new();
    let mut welded_normals = Vec::new();
    let mut welded_uvs = Vec::new();

    for ((position, normal), uv) in positions.iter().zip(normals).zip(uvs) {
        let mut key = [0; 8];
        for (slot, value) in key
            .iter_mut()
            .zip(quantise(position).chain(quantise(normal)).chain(quantise(uv)))
        {
            *slot = value;
        }

        let index = *lookup.entry(key).or_insert_with(|| {
            welded_positions.push(*position);
            welded_normals.push(*normal);
            welded_uvs.push(*uv);
            (welded_positions.len() - 1) as u32
        });
        remap.push(index);
    }

    let indices: Vec<u32> = match mesh.indices() {
        Some(indices) => indices.iter().map(|i| remap[i]).collect(),
        None => remap.clone(),
    };

    let removed = positions.len() - welded_positions.len();

    let mut welded = Mesh::new(mesh.primitive_topology(), mesh.asset_usage);
    welded.insert_attribute(Mesh::ATTRIBUTE_POSITION, welded_positions);
    welded.insert_attribute(Mesh::ATTRIBUTE_NORMAL, welded_normals);
    welded.insert_attribute(Mesh::ATTRIBUTE_UV_0, welded_uvs);
    welded.insert_indices(Indices::U32(indices));
    *mesh = welded;

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::mesh::PrimitiveTopology;

    fn unindexed_quad(uv_seam: bool) -> Mesh {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let c = [0.0, 1.0, 0.0];
        let d = [1.0, 1.0, 0.0];
        let seam_u = if uv_seam { 0.5 } else { 1.0 };

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![a, b, c, c, b, d]);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 6]);
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_UV_0,
            vec![
                [0.0, 0.0],
                [1.0, 0.0],
                [0.0, 1.0],
                [0.0, 1.0],
                [seam_u, 0.0],
                [1.0, 1.0],
            ],
        );
        mesh
    }

    #[test]
    fn test_weld_merges_shared_corners() {
        let mut mesh = unindexed_quad(false);
        let removed = weld_vertices(&mut mesh).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(mesh.count_vertices(), 4);
        let indices: Vec<usize> = mesh.indices().unwrap().iter().collect();
        assert_eq!(indices, vec![0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn test_weld_keeps_uv_seams_apart() {
        let mut mesh = unindexed_quad(true);
        let removed = weld_vertices(&mut mesh).unwrap();

        assert_eq!(removed, 1);
        assert_eq!(mesh.count_vertices(), 5);
    }

    #[test]
    fn test_weld_requires_normals() {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32, 0.0, 0.0]; 3]);

        let err = weld_vertices(&mut mesh).unwrap_err();
        assert!(matches!(err, ShowcaseError::MeshAttribute("normal")));
    }

    #[test]
    fn test_sphere_mesh_has_tangents() {
        let mesh = create_sphere_mesh(2.5, 4).unwrap();
        assert!(mesh.attribute(Mesh::ATTRIBUTE_TANGENT).is_some());
        assert!(mesh.indices().is_some());
    }
}

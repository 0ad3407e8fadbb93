use std::collections::HashMap;

use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;

use crate::errors::ShowcaseError;

/// A named node of a loaded bundle with every primitive mesh it owns.
#[derive(Debug, Clone)]
pub struct BundlePart {
    pub name: String,
    pub meshes: Vec<Handle<Mesh>>,
    pub transform: Transform,
}

/// Name-indexed view of a glTF bundle. Lookups return errors instead of empty references.
#[derive(Debug, Clone, Default)]
pub struct BundleIndex {
    label: String,
    parts: HashMap<String, BundlePart>,
    first_part: Option<String>,
}

impl BundleIndex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Adds a part; the first inserted part is the bundle's implicit first child.
    pub fn insert(&mut self, part: BundlePart) {
        if self.first_part.is_none() {
            self.first_part = Some(part.name.clone());
        }
        self.parts.insert(part.name.clone(), part);
    }

    /// Indexes mesh-bearing nodes in document order.
    pub fn from_gltf(
        label: impl Into<String>,
        gltf: &Gltf,
        nodes: &Assets<GltfNode>,
        meshes: &Assets<GltfMesh>,
    ) -> Self {
        let mut index = Self::new(label);

        for node in gltf.nodes.iter().filter_map(|handle| nodes.get(handle)) {
            let Some(mesh) = node.mesh.as_ref().and_then(|handle| meshes.get(handle)) else {
                continue;
            };
            index.insert(BundlePart {
                name: node.name.clone(),
                meshes: mesh
                    .primitives
                    .iter()
                    .map(|primitive| primitive.mesh.clone())
                    .collect(),
                transform: node.transform,
            });
        }

        debug!(
            "Indexed bundle '{}': {} mesh nodes",
            index.label,
            index.parts.len()
        );
        index
    }

    /// Exact-name lookup.
    pub fn part(&self, name: &str) -> Result<&BundlePart, ShowcaseError> {
        self.parts
            .get(name)
            .ok_or_else(|| ShowcaseError::MissingPart {
                bundle: self.label.clone(),
                part: name.to_string(),
            })
    }

    pub fn first_part(&self) -> Result<&BundlePart, ShowcaseError> {
        self.first_part
            .as_deref()
            .and_then(|name| self.parts.get(name))
            .ok_or_else(|| ShowcaseError::EmptyBundle {
                bundle: self.label.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

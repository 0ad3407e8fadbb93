use thiserror::Error;

use crate::engine::scene::scene_state::SceneSlot;

/// Failures while assembling the scene from loaded bundles.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("bundle '{bundle}' has no child named '{part}'")]
    MissingPart { bundle: String, part: String },

    #[error("bundle '{bundle}' contains no mesh node")]
    EmptyBundle { bundle: String },

    #[error("scene slot {0:?} is already bound")]
    SlotBound(SceneSlot),

    #[error("icosphere generation failed: {0}")]
    Icosphere(String),

    #[error("mesh attribute {0} missing or in an unsupported format")]
    MeshAttribute(&'static str),

    #[error("tangent generation failed: {0}")]
    Tangents(#[from] bevy::render::mesh::GenerateTangentsError),
}

/// Failures while reading or writing a tweakable parameter.
#[derive(Debug, Error, PartialEq)]
pub enum TweakError {
    #[error("no tweak registered under '{0}'")]
    UnknownTweak(String),

    #[error("tweak '{id}' expects a {expected} value")]
    KindMismatch { id: String, expected: &'static str },

    #[error("'{0}' is not a valid hex colour")]
    InvalidColor(String),
}

use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::assets::OVERLAY_SHADER_PATH;

/// Full-screen black quad; `params.x` is the alpha animated by the reveal fade.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct OverlayMaterial {
    #[uniform(0)]
    pub params: Vec4,
}

impl OverlayMaterial {
    pub fn opaque() -> Self {
        Self {
            params: Vec4::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.params.x
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.params.x = alpha.clamp(0.0, 1.0);
    }
}

impl UiMaterial for OverlayMaterial {
    fn fragment_shader() -> ShaderRef {
        OVERLAY_SHADER_PATH.into()
    }
}

/// The reveal overlay. Keeps full opacity until the fade cue arms it.
#[derive(Component, Debug, Default)]
pub struct FadeOverlay {
    pub armed: bool,
}

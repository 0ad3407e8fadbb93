use bevy::prelude::*;
use constants::surfaces::{
    MONKEY_SURFACE, PLANE_COLOR, PLANE_METALLIC, PLANE_ROUGHNESS, SPHERE_SURFACE,
    SurfaceDefaults, TV_SURFACE,
};

use crate::engine::materials::wobble::WobbleUniform;
use crate::errors::TweakError;

/// Colour kept both as the string the panel shows and the linear value shaders read.
#[derive(Debug, Clone, PartialEq)]
pub struct HexColor {
    hex: String,
    linear: LinearRgba,
}

impl HexColor {
    pub fn parse(hex: &str) -> Result<Self, TweakError> {
        let srgba = Srgba::hex(hex).map_err(|_| TweakError::InvalidColor(hex.to_string()))?;
        Ok(Self {
            hex: srgba.to_hex(),
            linear: LinearRgba::from(srgba),
        })
    }

    /// Re-derives the shader value immediately. On error the previous colour is kept.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), TweakError> {
        *self = Self::parse(hex)?;
        Ok(())
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn shader_value(&self) -> Vec4 {
        Vec4::new(
            self.linear.red,
            self.linear.green,
            self.linear.blue,
            self.linear.alpha,
        )
    }

    pub fn color(&self) -> Color {
        Color::LinearRgba(self.linear)
    }

    // Defaults are compile-time literals.
    fn from_default(hex: &str) -> Self {
        Self::parse(hex).unwrap_or(Self {
            hex: "#FFFFFF".to_string(),
            linear: LinearRgba::WHITE,
        })
    }
}

/// One wobble uniform group. Only `time` changes without user input.
#[derive(Debug, Clone, PartialEq)]
pub struct WobbleParams {
    pub position_frequency: f32,
    pub time_frequency: f32,
    pub strength: f32,
    pub warp_position_frequency: f32,
    pub warp_time_frequency: f32,
    pub warp_strength: f32,
    pub time: f32,
    pub color_a: HexColor,
    pub color_b: HexColor,
}

impl WobbleParams {
    pub fn uniform(&self) -> WobbleUniform {
        WobbleUniform {
            position_frequency: self.position_frequency,
            time_frequency: self.time_frequency,
            strength: self.strength,
            warp_position_frequency: self.warp_position_frequency,
            warp_time_frequency: self.warp_time_frequency,
            warp_strength: self.warp_strength,
            time: self.time,
            color_a: self.color_a.shader_value(),
            color_b: self.color_b.shader_value(),
        }
    }
}

/// PBR base settings underneath a wobble surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishParams {
    pub metallic: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub ior: f32,
    pub thickness: f32,
}

impl FinishParams {
    pub fn apply_to(&self, material: &mut StandardMaterial) {
        material.metallic = self.metallic;
        material.perceptual_roughness = self.roughness;
        material.specular_transmission = self.transmission;
        material.ior = self.ior;
        material.thickness = self.thickness;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceTuning {
    pub wobble: WobbleParams,
    pub finish: FinishParams,
}

impl From<&SurfaceDefaults> for SurfaceTuning {
    fn from(defaults: &SurfaceDefaults) -> Self {
        Self {
            wobble: WobbleParams {
                position_frequency: defaults.position_frequency,
                time_frequency: defaults.time_frequency,
                strength: defaults.strength,
                warp_position_frequency: defaults.warp_position_frequency,
                warp_time_frequency: defaults.warp_time_frequency,
                warp_strength: defaults.warp_strength,
                time: 0.0,
                color_a: HexColor::from_default(defaults.color_a),
                color_b: HexColor::from_default(defaults.color_b),
            },
            finish: FinishParams {
                metallic: defaults.metallic,
                roughness: defaults.roughness,
                transmission: defaults.transmission,
                ior: defaults.ior,
                thickness: defaults.thickness,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaneTuning {
    pub color: HexColor,
    pub metallic: f32,
    pub roughness: f32,
}

impl PlaneTuning {
    pub fn apply_to(&self, material: &mut StandardMaterial) {
        material.base_color = self.color.color();
        material.metallic = self.metallic;
        material.perceptual_roughness = self.roughness;
    }
}

/// Every live-editable parameter in the scene.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ShowcaseTuning {
    pub plane: PlaneTuning,
    pub tv: SurfaceTuning,
    pub sphere: SurfaceTuning,
    pub monkey: SurfaceTuning,
}

impl Default for ShowcaseTuning {
    fn default() -> Self {
        Self {
            plane: PlaneTuning {
                color: HexColor::from_default(PLANE_COLOR),
                metallic: PLANE_METALLIC,
                roughness: PLANE_ROUGHNESS,
            },
            tv: SurfaceTuning::from(&TV_SURFACE),
            sphere: SurfaceTuning::from(&SPHERE_SURFACE),
            monkey: SurfaceTuning::from(&MONKEY_SURFACE),
        }
    }
}

impl ShowcaseTuning {
    /// Writes the shared clock into the three uniform groups and nothing else.
    pub fn set_time(&mut self, elapsed: f32) {
        self.tv.wobble.time = elapsed;
        self.sphere.wobble.time = elapsed;
        self.monkey.wobble.time = elapsed;
    }

    pub fn surfaces(&self) -> [&SurfaceTuning; 3] {
        [&self.tv, &self.sphere, &self.monkey]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_time_reaches_every_group() {
        let mut tuning = ShowcaseTuning::default();
        for frame in 1..=10 {
            tuning.set_time(frame as f32 * 0.25);
        }
        for surface in tuning.surfaces() {
            assert_eq!(surface.wobble.time, 2.5);
        }
    }

    #[test]
    fn test_set_time_leaves_other_parameters_alone() {
        let original = ShowcaseTuning::default();
        let mut tuning = original.clone();
        tuning.set_time(42.0);

        for (before, after) in original.surfaces().iter().zip(tuning.surfaces()) {
            let mut after = after.clone();
            after.wobble.time = before.wobble.time;
            assert_eq!(**before, after);
        }
        assert_eq!(original.plane, tuning.plane);
    }

    #[test]
    fn test_hex_colour_updates_shader_value_immediately() {
        let mut colour = HexColor::parse("#0000ff").unwrap();
        assert!(colour.shader_value().abs_diff_eq(Vec4::new(0.0, 0.0, 1.0, 1.0), 1e-5));

        colour.set_hex("#00ff00").unwrap();
        assert!(colour.shader_value().abs_diff_eq(Vec4::new(0.0, 1.0, 0.0, 1.0), 1e-5));
        assert!(colour.hex().eq_ignore_ascii_case("#00ff00"));
    }

    #[test]
    fn test_invalid_hex_keeps_previous_colour() {
        let mut colour = HexColor::parse("#ff0000").unwrap();
        let err = colour.set_hex("not-a-colour").unwrap_err();
        assert_eq!(err, TweakError::InvalidColor("not-a-colour".to_string()));
        assert!(colour.shader_value().abs_diff_eq(Vec4::new(1.0, 0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn test_uniform_mirrors_params() {
        let tuning = ShowcaseTuning::default();
        let uniform = tuning.sphere.wobble.uniform();
        assert_eq!(uniform.strength, tuning.sphere.wobble.strength);
        assert_eq!(uniform.warp_strength, tuning.sphere.wobble.warp_strength);
        assert_eq!(uniform.color_b, tuning.sphere.wobble.color_b.shader_value());
    }
}

/// Seed values for one wobble surface.
pub struct SurfaceDefaults {
    pub position_frequency: f32,
    pub time_frequency: f32,
    pub strength: f32,
    pub warp_position_frequency: f32,
    pub warp_time_frequency: f32,
    pub warp_strength: f32,
    pub color_a: &'static str,
    pub color_b: &'static str,
    pub metallic: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub ior: f32,
    pub thickness: f32,
}

pub const TV_SURFACE: SurfaceDefaults = SurfaceDefaults {
    position_frequency: 0.5,
    time_frequency: 0.4,
    strength: 0.3,
    warp_position_frequency: 0.38,
    warp_time_frequency: 0.12,
    warp_strength: 1.7,
    color_a: "#1d2cf5",
    color_b: "#f5a11d",
    metallic: 0.0,
    roughness: 0.5,
    transmission: 0.0,
    ior: 1.5,
    thickness: 1.5,
};

pub const SPHERE_SURFACE: SurfaceDefaults = SurfaceDefaults {
    position_frequency: 0.5,
    time_frequency: 0.4,
    strength: 0.3,
    warp_position_frequency: 0.38,
    warp_time_frequency: 0.12,
    warp_strength: 1.7,
    color_a: "#0000ff",
    color_b: "#ff0000",
    metallic: 0.0,
    roughness: 0.5,
    transmission: 0.0,
    ior: 1.5,
    thickness: 1.5,
};

pub const MONKEY_SURFACE: SurfaceDefaults = SurfaceDefaults {
    position_frequency: 0.8,
    time_frequency: 0.6,
    strength: 0.15,
    warp_position_frequency: 0.5,
    warp_time_frequency: 0.2,
    warp_strength: 1.2,
    color_a: "#22c55e",
    color_b: "#a855f7",
    metallic: 0.1,
    roughness: 0.35,
    transmission: 0.0,
    ior: 1.5,
    thickness: 1.0,
};

pub const PLANE_COLOR: &str = "#ffffff";
pub const PLANE_METALLIC: f32 = 0.0;
pub const PLANE_ROUGHNESS: f32 = 0.9;

pub const SCREEN_TINT: &str = "#b4d7ff";
pub const SNICKERS_TINT: &str = "#8a5a2b";

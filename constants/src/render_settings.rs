use bevy::math::Vec3;

pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START: Vec3 = Vec3::new(13.0, -3.0, -5.0);

/// Orbit damping factor applied per frame, same convention as three-style orbit controls.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;
pub const ORBIT_ZOOM_SPEED: f32 = 0.1;
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 40.0;

/// Device pixel ratio is never allowed above this.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

pub const LIGHT_ILLUMINANCE: f32 = 3_000.0;
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.25, 2.0, -2.25);
pub const SHADOW_MAP_SIZE: usize = 1024;
pub const SHADOW_MAXIMUM_DISTANCE: f32 = 15.0;
pub const SHADOW_DEPTH_BIAS: f32 = 0.02;
pub const SHADOW_NORMAL_BIAS: f32 = 0.6;

pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
pub const SKYBOX_BRIGHTNESS: f32 = 1_000.0;

pub const PLANE_SIZE: f32 = 15.0;
pub const PLANE_POSITION: Vec3 = Vec3::new(0.0, -5.0, 0.0);

pub const SPHERE_RADIUS: f32 = 2.5;
/// Ico subdivisions; bevy caps this at 80.
pub const SPHERE_SUBDIVISIONS: u32 = 50;
pub const SPHERE_POSITION: Vec3 = Vec3::ZERO;

pub const TV_POSITION: Vec3 = Vec3::new(0.0, -2.0, 5.5);
pub const MONKEY_POSITION: Vec3 = Vec3::new(0.0, 0.0, -5.5);

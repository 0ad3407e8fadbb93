/// Manifest requested first; it names every other asset.
pub const MANIFEST_PATH: &str = "showcase.manifest.json";

pub const ENVIRONMENT_MAP_PATH: &str = "environment/urban_alley_cubemap.dds";
pub const TV_BUNDLE_PATH: &str = "models/tv.glb";
pub const MONKEY_BUNDLE_PATH: &str = "models/monkey.glb";

/// Named children looked up in the TV bundle.
pub const TV_PART: &str = "TV";
pub const SCREEN_PART: &str = "Screen";
pub const SNICKERS_PART: &str = "Snickers";

pub const WOBBLE_SHADER_PATH: &str = "shaders/wobble.wgsl";
pub const WOBBLE_PREPASS_SHADER_PATH: &str = "shaders/wobble_prepass.wgsl";
pub const OVERLAY_SHADER_PATH: &str = "shaders/overlay.wgsl";

/// Delay before the overlay starts fading, counted from load completion (seconds).
pub const OVERLAY_FADE_DELAY: f32 = 0.5;

/// Overlay fade length (seconds).
pub const OVERLAY_FADE_DURATION: f32 = 1.5;

/// Lazily attached meshes become visible this long after completion.
pub const REVEAL_MESHES_AFTER: f32 = 0.5;

/// The tweak panel opens this long after completion.
pub const OPEN_PANEL_AFTER: f32 = 2.0;

use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::render_settings::MAX_PIXEL_RATIO;

use crate::engine::scene::environment::ShowcaseCamera;

/// Camera aspect and render pixel ratio for a given window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub aspect: f32,
    pub pixel_ratio: f32,
}

impl ViewportMetrics {
    /// Degenerate sizes are treated as one pixel so the aspect stays finite.
    pub fn compute(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let width = if width.is_finite() { width.max(1.0) } else { 1.0 };
        let height = if height.is_finite() { height.max(1.0) } else { 1.0 };
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };

        Self {
            aspect: width / height,
            pixel_ratio,
        }
    }
}

pub fn apply_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut windows: Query<&mut Window>,
    mut projections: Query<&mut Projection, With<ShowcaseCamera>>,
) {
    let Some(event) = resize_events.read().last() else {
        return;
    };
    let Ok(mut window) = windows.get_mut(event.window) else {
        return;
    };

    let device_ratio = window.resolution.base_scale_factor();
    let metrics = ViewportMetrics::compute(event.width, event.height, device_ratio);

    // Override only when the device exceeds the cap.
    let scale_override = (device_ratio > MAX_PIXEL_RATIO).then_some(metrics.pixel_ratio);
    if window.resolution.scale_factor_override() != scale_override {
        window.resolution.set_scale_factor_override(scale_override);
    }

    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = metrics.aspect;
        }
    }

    debug!(
        "Viewport {}x{} -> aspect {:.3}, pixel ratio {}",
        event.width, event.height, metrics.aspect, metrics.pixel_ratio
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_one_by_one_viewport() {
        let metrics = ViewportMetrics::compute(1.0, 1.0, 1.0);
        assert_eq!(metrics.aspect, 1.0);
        assert_eq!(metrics.pixel_ratio, 1.0);
    }

    #[test]
    fn test_zero_height_stays_finite() {
        let metrics = ViewportMetrics::compute(800.0, 0.0, 1.0);
        assert!(metrics.aspect.is_finite());
        assert_eq!(metrics.aspect, 800.0);
    }

    #[test]
    fn test_huge_viewport_caps_pixel_ratio() {
        let metrics = ViewportMetrics::compute(7680.0, 4320.0, 3.0);
        assert!((metrics.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(metrics.pixel_ratio, 2.0);
    }

    #[test]
    fn test_pixel_ratio_never_exceeds_cap() {
        for ratio in [0.5, 1.0, 1.5, 2.0, 2.5, 4.0, f32::INFINITY, -1.0] {
            let metrics = ViewportMetrics::compute(1024.0, 768.0, ratio);
            assert!(metrics.pixel_ratio <= 2.0 && metrics.pixel_ratio > 0.0);
        }
    }

    fn resized_world(scale_factor: f32, width: f32, height: f32) -> (World, Entity, Entity) {
        let mut world = World::new();
        world.init_resource::<Events<WindowResized>>();

        let mut window = Window::default();
        window.resolution.set_scale_factor(scale_factor);
        let window = world.spawn(window).id();
        let camera = world
            .spawn((
                ShowcaseCamera,
                Projection::Perspective(PerspectiveProjection {
                    aspect_ratio: 0.5,
                    ..default()
                }),
            ))
            .id();

        world.send_event(WindowResized {
            window,
            width,
            height,
        });
        world.run_system_once(apply_viewport_resize).unwrap();
        (world, window, camera)
    }

    fn aspect(world: &World, camera: Entity) -> f32 {
        match world.get::<Projection>(camera).unwrap() {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => panic!("camera lost its perspective projection"),
        }
    }

    #[test]
    fn test_resize_to_one_pixel_updates_projection() {
        let (world, window, camera) = resized_world(1.0, 1.0, 1.0);

        assert_eq!(aspect(&world, camera), 1.0);
        let window = world.get::<Window>(window).unwrap();
        assert_eq!(window.resolution.scale_factor_override(), None);
    }

    #[test]
    fn test_dense_display_is_capped_on_resize() {
        let (world, window, camera) = resized_world(3.0, 1920.0, 1080.0);

        assert!((aspect(&world, camera) - 1920.0 / 1080.0).abs() < 1e-6);
        let window = world.get::<Window>(window).unwrap();
        assert_eq!(window.resolution.scale_factor_override(), Some(MAX_PIXEL_RATIO));
    }
}

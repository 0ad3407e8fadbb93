use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SPEED,
};

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const PAN_SPEED: f32 = 0.0015;

/// Damped orbit around a fixed target. Input accumulates into pending deltas;
/// each `advance` applies a `damping_factor` share of them and decays the rest.
#[derive(Component, Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    pending_pan: Vec3,
}

impl OrbitController {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(f32::EPSILON);

        Self {
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }

    /// Drag in screen pixels.
    pub fn rotate(&mut self, drag: Vec2) {
        self.pending_yaw -= drag.x * self.rotate_speed;
        self.pending_pitch += drag.y * self.rotate_speed;
    }

    /// Positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.pending_zoom -= scroll * self.zoom_speed;
    }

    pub fn pan(&mut self, drag: Vec2) {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.pending_pan += (-right * drag.x + up * drag.y) * self.radius * PAN_SPEED;
    }

    pub fn is_settled(&self) -> bool {
        self.pending_yaw.abs() < 1e-6
            && self.pending_pitch.abs() < 1e-6
            && self.pending_zoom.abs() < 1e-6
            && self.pending_pan.length_squared() < 1e-12
    }

    /// One damped step.
    pub fn advance(&mut self) {
        let share = self.damping_factor;
        let keep = 1.0 - share;

        self.yaw += self.pending_yaw * share;
        self.pitch = (self.pitch + self.pending_pitch * share).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.radius = (self.radius * (self.pending_zoom * share).exp())
            .clamp(self.min_distance, self.max_distance);
        self.target += self.pending_pan * share;

        self.pending_yaw *= keep;
        self.pending_pitch *= keep;
        self.pending_zoom *= keep;
        self.pending_pan *= keep;
    }

    pub fn position(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

/// Left drag orbits, right drag pans, wheel zooms.
pub fn orbit_camera_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut controllers: Query<&mut OrbitController>,
    ui_interactions: Query<&Interaction>,
) {
    // Pointer is over a UI control.
    if ui_interactions.iter().any(|i| *i != Interaction::None) {
        mouse_motion.clear();
        scroll_events.clear();
        return;
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    for mut controller in &mut controllers {
        if mouse_delta != Vec2::ZERO {
            if mouse_button.pressed(MouseButton::Left) {
                controller.rotate(mouse_delta);
            } else if mouse_button.pressed(MouseButton::Right) {
                controller.pan(mouse_delta);
            }
        }
        if scroll_accum.abs() > f32::EPSILON {
            controller.zoom(scroll_accum);
        }
    }
}

/// Per-frame damping step; writes the camera transform.
pub fn advance_orbit_camera(mut cameras: Query<(&mut OrbitController, &mut Transform)>) {
    for (mut controller, mut transform) in &mut cameras {
        controller.advance();
        *transform = controller.transform();
    }
}

//! Orbit camera driven by per-frame pointer input.

use glam::{Mat4, Vec3};

use crate::input::{Input, MouseButton};

/// Radians of rotation per pixel of drag.
const ROTATE_SENSITIVITY: f32 = 0.005;
/// World units of zoom per scroll line.
const ZOOM_SENSITIVITY: f32 = 5.0;
/// World units of vertical pan per pixel of drag.
const PAN_SENSITIVITY: f32 = 0.5;
/// Idle auto-orbit, radians per frame while no button is held.
const IDLE_SPIN: f32 = 0.001;

/// Pitch bounds keep `sin(pitch) > 0`, so the look direction never aligns
/// with the +Y up vector and the view matrix stays well defined.
const PITCH_MIN: f32 = 0.1;
const PITCH_MAX: f32 = 3.0;
/// Minimum orbit radius; closer and the camera would pass through the target.
const RADIUS_MIN: f32 = 10.0;

/// Spherical-orbit camera around a movable target point.
///
/// `pitch` is the polar angle measured from the +Y axis, so small values look
/// down from above the target and values near pi look up from below.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    /// Camera positioned to frame the Lorenz attractor at raw coordinates.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 1.0,
            radius: 300.0,
            target: Vec3::new(0.0, 90.0, 0.0),
        }
    }

    /// Apply one frame of pointer input.
    ///
    /// Left drag orbits, right drag pans the target vertically, scroll zooms,
    /// and an idle frame advances the yaw slightly so the view keeps turning.
    pub fn handle_input(&mut self, input: &Input) {
        if input.mouse_held(MouseButton::Left) {
            let delta = input.cursor_delta();
            self.yaw += delta.x * ROTATE_SENSITIVITY;
            self.pitch = (self.pitch - delta.y * ROTATE_SENSITIVITY).clamp(PITCH_MIN, PITCH_MAX);
        } else if input.mouse_held(MouseButton::Right) {
            self.target.y += input.cursor_delta().y * PAN_SENSITIVITY;
        } else {
            self.yaw += IDLE_SPIN;
        }

        self.radius = (self.radius - input.scroll_delta() * ZOOM_SENSITIVITY).max(RADIUS_MIN);
    }

    /// Calculate the camera's world position from the orbit parameters.
    pub fn position(&self) -> Vec3 {
        let x = self.radius * self.pitch.sin() * self.yaw.cos();
        let y = self.radius * self.pitch.cos();
        let z = self.radius * self.pitch.sin() * self.yaw.sin();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

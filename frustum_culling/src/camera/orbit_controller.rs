/// Orbit controller: spins a camera around its target.
///
/// Drives the demo scene the way an orbital camera mode does: every update
/// rotates the eye about the target, around the camera's up axis, keeping
/// the distance to the target constant.

use glam::{Quat, Vec3};
use super::camera::Camera;

/// Rotates a camera's position about its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitController {
    /// Rotation speed in radians per second
    pub angular_speed: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self { angular_speed: 0.5 }
    }
}

impl OrbitController {
    /// Create a controller with the given angular speed (rad/s).
    pub fn new(angular_speed: f32) -> Self {
        Self { angular_speed }
    }

    /// Advance the orbit by `delta_seconds`.
    ///
    /// Leaves the camera untouched when its up vector is zero.
    pub fn update(&self, camera: &mut Camera, delta_seconds: f32) {
        let axis = camera.up.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }

        let rotation = Quat::from_axis_angle(axis, self.angular_speed * delta_seconds);
        let offset = camera.position - camera.target;
        camera.position = camera.target + rotation * offset;
    }
}

#[cfg(test)]
#[path = "orbit_controller_tests.rs"]
mod tests;

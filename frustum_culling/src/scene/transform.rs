/// Transform: translation, rotation and scale of a scene object.
///
/// The sample scene only moves objects around, but the world AABB is
/// always computed from the full matrix so rotated and scaled objects
/// cull correctly.

use glam::{Mat4, Quat, Vec3};

/// Local-to-world transform (scale, then rotate, then translate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World position
    pub translation: Vec3,
    /// Orientation
    pub rotation: Quat,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    /// Pure translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// World matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;

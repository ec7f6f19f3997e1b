/// Camera: per-frame snapshot of the application's camera.
///
/// The culling core treats the camera as read-only input. Clip distances
/// and viewport size are tracked separately from the camera, as the
/// application changes them independently (interactive clip adjustment,
/// window resize).

use glam::{Mat4, Vec3};
use crate::cull_err;
use crate::error::{Error, Result};

/// Below this length a direction is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Projection kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Perspective projection; `fovy` is the vertical field of view in degrees
    #[default]
    Perspective,
    /// Orthographic projection; `fovy` is the view height in world units
    Orthographic,
}

/// Camera snapshot: eye, look-at target, up vector, vertical FOV and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Look-at target
    pub target: Vec3,
    /// Up hint (re-orthogonalized by `basis()`)
    pub up: Vec3,
    /// Vertical field of view in degrees (view height for orthographic)
    pub fovy: f32,
    /// Projection kind
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 5.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    /// Perspective camera looking from `position` at `target`.
    pub fn perspective(position: Vec3, target: Vec3, up: Vec3, fovy: f32) -> Self {
        Self { position, target, up, fovy, projection: Projection::Perspective }
    }

    /// Orthographic camera; `view_height` is in world units.
    pub fn orthographic(position: Vec3, target: Vec3, up: Vec3, view_height: f32) -> Self {
        Self { position, target, up, fovy: view_height, projection: Projection::Orthographic }
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Orthonormal view basis `(forward, right, up)`.
    ///
    /// `up` is rebuilt from `right x forward`, not taken from the input.
    /// Undefined when [`Camera::is_degenerate`] is true.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize();
        let true_up = right.cross(forward);
        (forward, right, true_up)
    }

    /// True when the view direction is zero-length or parallel to `up`.
    ///
    /// A degenerate camera violates the extractor's precondition.
    pub fn is_degenerate(&self) -> bool {
        let view = self.target - self.position;
        if view.length() < DEGENERATE_EPSILON || self.up.length() < DEGENERATE_EPSILON {
            return true;
        }
        view.normalize().cross(self.up.normalize()).length() < DEGENERATE_EPSILON
    }

    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Right-handed projection matrix with OpenGL clip depth ([-1, 1]).
    pub fn projection_matrix(&self, aspect: f32, clip: &ClipRange) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh_gl(
                self.fovy.to_radians(), aspect, clip.near(), clip.far(),
            ),
            Projection::Orthographic => {
                let half_height = self.fovy * 0.5;
                let half_width = half_height * aspect;
                Mat4::orthographic_rh_gl(
                    -half_width, half_width, -half_height, half_height,
                    clip.near(), clip.far(),
                )
            }
        }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self, aspect: f32, clip: &ClipRange) -> Mat4 {
        self.projection_matrix(aspect, clip) * self.view_matrix()
    }
}

// ===== CLIP RANGE =====

/// Near/far clip distances.
///
/// Invariant: `0 < near < far`, both finite. Enforced here, at the camera
/// boundary, so the frustum extractor never re-validates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    near: f32,
    far: f32,
}

impl Default for ClipRange {
    fn default() -> Self {
        Self { near: 0.1, far: 1000.0 }
    }
}

impl ClipRange {
    /// Smallest near distance accepted by `clamped`
    pub const MIN_NEAR: f32 = 0.01;
    /// Smallest far - near gap kept by `clamped`
    pub const MIN_DEPTH_SPAN: f32 = 0.01;
    /// Largest near distance accepted by `clamped` (leaves room for far)
    pub const MAX_NEAR: f32 = f32::MAX / 2.0;

    /// Validated clip range.
    pub fn new(near: f32, far: f32) -> Result<Self> {
        let valid = near.is_finite() && far.is_finite() && near > 0.0 && far > near;
        if !valid {
            return Err(cull_err!("culling::ClipRange", Error::InvalidClipRange { near, far }));
        }
        Ok(Self { near, far })
    }

    /// Clip range forced into the valid domain. Never fails.
    ///
    /// Non-finite inputs fall back to the defaults.
    pub fn clamped(near: f32, far: f32) -> Self {
        let defaults = Self::default();
        let near = if near.is_finite() {
            near.clamp(Self::MIN_NEAR, Self::MAX_NEAR)
        } else {
            defaults.near
        };
        let far = if far.is_finite() { far } else { defaults.far };
        Self { near, far: far.max(near + Self::depth_span(near)) }
    }

    /// Copy with a new near distance, kept below `far`.
    pub fn with_near(&self, near: f32) -> Self {
        Self::clamped(near.min(self.far - Self::depth_span(self.far)), self.far)
    }

    /// Copy with a new far distance, kept above `near`.
    pub fn with_far(&self, far: f32) -> Self {
        Self::clamped(self.near, far)
    }

    /// Gap kept between near and far around `distance`.
    ///
    /// `MIN_DEPTH_SPAN`, widened to a few ulps so it survives rounding at
    /// large distances.
    fn depth_span(distance: f32) -> f32 {
        Self::MIN_DEPTH_SPAN.max(distance * f32::EPSILON * 4.0)
    }

    /// Near clip distance
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance
    pub fn far(&self) -> f32 {
        self.far
    }
}

// ===== VIEWPORT =====

/// Viewport size in pixels; source of the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

impl Viewport {
    /// Validated viewport (both sides non-zero).
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(cull_err!("culling::Viewport", Error::InvalidViewport(
                format!("{}x{} has a zero side", width, height)
            )));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

/// Frustum: six clipping planes for visibility culling.
///
/// Each plane stores a unit normal pointing into the view volume and a
/// signed offset. A point P is on the inside of a plane iff
/// `dot(normal, P) + distance >= 0`, and inside the frustum iff it is on
/// the inside of all six planes.
///
/// The frustum is rebuilt from scratch every frame from the camera
/// snapshot and the current clip range. Nothing carries over between frames.

use glam::{Mat4, Vec3, Vec4};
use crate::bounds::AABB;
use super::camera::{Camera, ClipRange, Projection};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Half-space boundary: unit inward normal and signed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing to the inside
    pub normal: Vec3,
    /// Signed offset: `dot(normal, P) + distance == 0` on the plane
    pub distance: f32,
}

impl Plane {
    /// Plane with the given normal passing through `point`.
    ///
    /// The normal is normalized before the offset is computed.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        Self { normal, distance: -normal.dot(point) }
    }

    /// Plane from (A, B, C, D) coefficients of Ax + By + Cz + D = 0,
    /// rescaled so (A, B, C) has unit length. A zero normal is kept as is.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let length = normal.length();
        if length > 0.0 {
            Self { normal: normal / length, distance: coefficients.w / length }
        } else {
            Self { normal, distance: coefficients.w }
        }
    }

    /// Signed distance from `point` to the plane (positive inside).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Build the frustum of a camera for the given aspect ratio and clip range.
    ///
    /// Precondition: the camera is not degenerate (see [`Camera::is_degenerate`]).
    /// The planes are unspecified otherwise.
    pub fn from_camera(camera: &Camera, aspect: f32, clip: &ClipRange) -> Self {
        match camera.projection {
            Projection::Perspective => Self::perspective(
                camera, aspect, clip.near(), clip.far(),
            ),
            Projection::Orthographic => Self::orthographic(
                camera, aspect, clip.near(), clip.far(),
            ),
        }
    }

    /// Side planes pass through the eye. Each is spanned by the direction
    /// toward a frustum edge and the perpendicular camera axis.
    fn perspective(camera: &Camera, aspect: f32, near: f32, far: f32) -> Self {
        let eye = camera.position;
        let (forward, right, up) = camera.basis();

        let half_height = (camera.fovy.to_radians() * 0.5).tan();
        let half_width = half_height * aspect;

        let toward_top = forward + up * half_height;
        let toward_bottom = forward - up * half_height;
        let toward_left = forward - right * half_width;
        let toward_right = forward + right * half_width;

        let (near_plane, far_plane) = Self::depth_planes(eye, forward, near, far);

        Self {
            planes: [
                Plane::from_normal_and_point(toward_left.cross(up), eye),
                Plane::from_normal_and_point(up.cross(toward_right), eye),
                Plane::from_normal_and_point(right.cross(toward_bottom), eye),
                Plane::from_normal_and_point(toward_top.cross(right), eye),
                near_plane,
                far_plane,
            ],
        }
    }

    /// Side planes are parallel to the view direction, offset from the eye
    /// by half the view width/height (world units).
    fn orthographic(camera: &Camera, aspect: f32, near: f32, far: f32) -> Self {
        let eye = camera.position;
        let (forward, right, up) = camera.basis();

        let half_height = camera.fovy * 0.5;
        let half_width = half_height * aspect;

        let (near_plane, far_plane) = Self::depth_planes(eye, forward, near, far);

        Self {
            planes: [
                Plane::from_normal_and_point(right, eye - right * half_width),
                Plane::from_normal_and_point(-right, eye + right * half_width),
                Plane::from_normal_and_point(up, eye - up * half_height),
                Plane::from_normal_and_point(-up, eye + up * half_height),
                near_plane,
                far_plane,
            ],
        }
    }

    /// Near and far pass through points on the view axis, not through the eye.
    fn depth_planes(eye: Vec3, forward: Vec3, near: f32, far: f32) -> (Plane, Plane) {
        (
            Plane::from_normal_and_point(forward, eye + forward * near),
            Plane::from_normal_and_point(-forward, eye + forward * far),
        )
    }

    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method and expects OpenGL clip depth
    /// ([-1, 1]), as produced by [`Camera::view_projection_matrix`].
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row = |i: usize| vp.row(i);

        Self {
            planes: [
                Plane::from_coefficients(row(3) + row(0)),
                Plane::from_coefficients(row(3) - row(0)),
                Plane::from_coefficients(row(3) + row(1)),
                Plane::from_coefficients(row(3) - row(1)),
                Plane::from_coefficients(row(3) + row(2)),
                Plane::from_coefficients(row(3) - row(2)),
            ],
        }
    }

    /// Plane by index (`PLANE_LEFT` ..= `PLANE_FAR`)
    pub fn plane(&self, index: usize) -> Option<&Plane> {
        self.planes.get(index)
    }

    /// Test if a point is inside or on the boundary of every plane.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// Test if an AABB is potentially visible.
    ///
    /// For each plane, takes the "positive vertex" (the corner farthest
    /// along the plane normal). If that corner is outside any plane, the
    /// whole box is outside. Conservative: may report boxes just outside
    /// a frustum corner as visible, never reports a visible box as culled.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        for plane in &self.planes {
            let normal = plane.normal;

            let p_vertex = Vec3::new(
                if normal.x > 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y > 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z > 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if normal.dot(p_vertex) + plane.distance < 0.0 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

/// Axis-aligned bounding boxes.
///
/// A local AABB is built once from an object's untransformed vertex
/// positions. Every frame it is re-fitted through the object's world
/// matrix by transforming its 8 corners, which keeps the result
/// axis-aligned and conservative (it may grow under rotation, but it
/// always contains the transformed geometry).

use glam::{Mat4, Vec3};
use crate::cull_err;
use crate::error::{Error, Result};

const FLOATS_PER_VERTEX: usize = 3;
const POSITION_BYTES: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();

/// Axis-Aligned Bounding Box
///
/// Invariant: `min <= max` componentwise for every box produced by this module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Default for AABB {
    fn default() -> Self {
        Self::ZERO
    }
}

impl AABB {
    /// Zero-sized box at the origin (bounds of an empty mesh)
    pub const ZERO: AABB = AABB { min: Vec3::ZERO, max: Vec3::ZERO };

    /// Create a box from two corners. Corners are reordered per axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Box centered on `center` with half-size `half_extents` on each axis.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self { min: center - half, max: center + half }
    }

    // ===== BUILDING =====

    /// Build the bounds of a flat position buffer (x, y, z triples).
    ///
    /// Only the first `vertex_count` triples are read. Zero vertices yield
    /// [`AABB::ZERO`]. Fails when the buffer holds fewer than
    /// `vertex_count * 3` floats.
    pub fn from_positions(positions: &[f32], vertex_count: usize) -> Result<Self> {
        let needed = match vertex_count.checked_mul(FLOATS_PER_VERTEX) {
            Some(needed) if needed <= positions.len() => needed,
            _ => {
                return Err(cull_err!("culling::AABB", Error::InvalidVertexData(format!(
                    "{} vertices do not fit in a buffer of {} floats",
                    vertex_count, positions.len()
                ))));
            }
        };

        let vertices = positions[..needed]
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(Vec3::from_slice);

        Ok(Self::fit(vertices))
    }

    /// Build the bounds of a point set. An empty set yields [`AABB::ZERO`].
    pub fn from_points(points: &[Vec3]) -> Self {
        Self::fit(points.iter().copied())
    }

    /// Build the bounds of a raw vertex byte buffer.
    ///
    /// Each vertex occupies `stride` bytes and stores its position as three
    /// native-endian `f32` at byte `offset`. The buffer need not be aligned,
    /// and the last vertex may stop right after its position (trailing
    /// attribute bytes are not required). Fails when the position does not
    /// fit in the stride or the buffer is too short for `vertex_count`
    /// vertices.
    pub fn from_vertex_bytes(
        bytes: &[u8],
        stride: usize,
        offset: usize,
        vertex_count: usize,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Ok(Self::ZERO);
        }
        let position_end = offset.checked_add(POSITION_BYTES);
        if position_end.map_or(true, |end| end > stride) {
            return Err(cull_err!("culling::AABB", Error::InvalidVertexData(format!(
                "position at offset {} does not fit in a {}-byte vertex",
                offset, stride
            ))));
        }
        // Last vertex only needs its position bytes, not a full stride
        let needed = (vertex_count - 1)
            .checked_mul(stride)
            .and_then(|start| start.checked_add(offset + POSITION_BYTES));
        if needed.map_or(true, |needed| needed > bytes.len()) {
            return Err(cull_err!("culling::AABB", Error::InvalidVertexData(format!(
                "{} vertices of stride {} do not fit in {} bytes",
                vertex_count, stride, bytes.len()
            ))));
        }

        let vertices = (0..vertex_count).map(|i| {
            let start = i * stride + offset;
            let xyz: [f32; 3] = bytemuck::pod_read_unaligned(&bytes[start..start + POSITION_BYTES]);
            Vec3::from_array(xyz)
        });

        Ok(Self::fit(vertices))
    }

    /// Single pass: seed with the first point, then widen componentwise.
    fn fit(mut points: impl Iterator<Item = Vec3>) -> Self {
        let Some(first) = points.next() else {
            return Self::ZERO;
        };

        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Self { min, max }
    }

    // ===== TRANSFORM =====

    /// The 8 corners, every min/max combination per axis.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Transform this local-space AABB by an affine matrix, returning
    /// the world-space AABB of the 8 transformed corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let corners = self.corners();
        let first = matrix.transform_point3(corners[0]);

        let (min, max) = corners[1..].iter().fold((first, first), |(min, max), &corner| {
            let p = matrix.transform_point3(corner);
            (min.min(p), max.max(p))
        });

        AABB { min, max }
    }

    // ===== QUERIES =====

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size on each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB { min: self.min.min(other.min), max: self.max.max(other.max) }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;

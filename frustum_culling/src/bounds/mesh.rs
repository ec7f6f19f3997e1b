//! Mesh vertex data as seen by the culling core.
//!
//! Mesh loading and GPU storage belong to the application. The core only
//! reads vertex positions once, when a scene object is created, to build
//! its local AABB.

use glam::Vec3;
use crate::error::Result;
use super::aabb::AABB;

/// Read-only access to a mesh's vertex positions.
///
/// Implemented by the application's mesh/model type. Scene objects hold an
/// `Arc<dyn MeshSource>` and release it when they are removed.
pub trait MeshSource: Send + Sync {
    /// Flat position buffer: x, y, z per vertex.
    fn positions(&self) -> &[f32];

    /// Number of vertices to read from `positions()`.
    fn vertex_count(&self) -> usize {
        self.positions().len() / 3
    }

    /// Local-space bounds of the mesh.
    fn local_bounds(&self) -> Result<AABB> {
        AABB::from_positions(self.positions(), self.vertex_count())
    }
}

/// In-memory vertex positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    name: String,
    positions: Vec<f32>,
}

impl MeshData {
    /// Create from a flat position buffer (x, y, z triples)
    pub fn new(name: impl Into<String>, positions: Vec<f32>) -> Self {
        Self { name: name.into(), positions }
    }

    /// Create from points
    pub fn from_points(name: impl Into<String>, points: &[Vec3]) -> Self {
        let positions = points.iter().flat_map(|p| p.to_array()).collect();
        Self::new(name, positions)
    }

    /// Axis-aligned cube of edge `size` centered on the origin (8 corners).
    pub fn cube(name: impl Into<String>, size: f32) -> Self {
        let half = size * 0.5;
        let corners = AABB::new(Vec3::splat(-half), Vec3::splat(half)).corners();
        Self::from_points(name, &corners)
    }

    /// Mesh name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl MeshSource for MeshData {
    fn positions(&self) -> &[f32] {
        &self.positions
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;

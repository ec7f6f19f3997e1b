//! Bounding volumes: AABB building and transformation.
//!
//! Local AABBs are built once per object from mesh vertex positions
//! and re-fitted in world space every frame.

mod aabb;
mod mesh;

pub use aabb::AABB;
pub use mesh::{MeshSource, MeshData};

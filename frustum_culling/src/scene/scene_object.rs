/// Scene object types for the culling pipeline.
///
/// A SceneObject pairs a mesh handle with its transform and bounds. The
/// local AABB is computed once at creation. The world AABB and the
/// visibility flag are rewritten every frame by a CameraCuller.

use std::fmt;
use std::sync::Arc;
use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::bounds::{AABB, MeshSource};
use crate::error::Result;
use super::transform::Transform;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneObject within a Scene.
    ///
    /// Keys remain valid even after other objects are removed.
    /// A key becomes invalid only when its own object is removed.
    pub struct SceneObjectKey;
}

// ===== SCENE OBJECT =====

/// A cullable object: mesh handle, transform, bounds and visibility.
pub struct SceneObject {
    /// Shared mesh resource, released when the object is dropped
    mesh: Arc<dyn MeshSource>,
    transform: Transform,
    /// Bounds of the mesh in local space (computed once)
    local_aabb: AABB,
    /// Local bounds transformed by the last culled transform
    world_aabb: AABB,
    /// Result of the last culling pass
    visible: bool,
}

impl SceneObject {
    /// Create an object, reading the mesh's vertex positions once to build
    /// its local AABB. Visible until the first culling pass says otherwise.
    pub(crate) fn new(mesh: Arc<dyn MeshSource>, transform: Transform) -> Result<Self> {
        let local_aabb = mesh.local_bounds()?;
        let world_aabb = local_aabb.transformed(&transform.to_matrix());

        Ok(Self {
            mesh,
            transform,
            local_aabb,
            world_aabb,
            visible: true,
        })
    }

    // ===== ACCESSORS =====

    pub fn mesh(&self) -> &Arc<dyn MeshSource> {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }

    /// Move the object, keeping rotation and scale.
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position;
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    pub fn local_aabb(&self) -> &AABB {
        &self.local_aabb
    }

    /// World-space bounds as of the last culling pass (for debug overlays).
    pub fn world_aabb(&self) -> &AABB {
        &self.world_aabb
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // ===== PER-FRAME =====

    /// Recompute the world AABB from the current transform.
    pub fn update_world_aabb(&mut self) -> &AABB {
        self.world_aabb = self.local_aabb.transformed(&self.transform.to_matrix());
        &self.world_aabb
    }
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("vertex_count", &self.mesh.vertex_count())
            .field("transform", &self.transform)
            .field("local_aabb", &self.local_aabb)
            .field("world_aabb", &self.world_aabb)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
#[path = "scene_object_tests.rs"]
mod tests;

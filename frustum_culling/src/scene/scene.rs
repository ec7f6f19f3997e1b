/// Scene: the set of cullable objects, owned by the caller.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Objects are stored contiguously for cache-friendly iteration.
/// The scene is passed explicitly into the culling pipeline each frame.

use std::sync::Arc;
use slotmap::SlotMap;
use glam::Vec3;
use crate::bounds::MeshSource;
use crate::cull_debug;
use crate::error::Result;
use super::scene_object::{SceneObject, SceneObjectKey};
use super::transform::Transform;

/// A collection of SceneObjects.
///
/// Objects are managed via stable keys (SceneObjectKey).
/// Keys remain valid even after other objects are removed.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<SceneObjectKey, SceneObject>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self { objects: SlotMap::with_key() }
    }

    /// Create a SceneObject from a mesh and add it to the scene.
    ///
    /// Reads the mesh's vertex positions once to compute the local AABB.
    /// Returns a stable key that remains valid until the object is removed.
    ///
    /// # Arguments
    ///
    /// * `mesh` - Shared mesh resource (held until the object is removed)
    /// * `transform` - Initial world transform
    pub fn create_object(
        &mut self,
        mesh: Arc<dyn MeshSource>,
        transform: Transform,
    ) -> Result<SceneObjectKey> {
        let object = SceneObject::new(mesh, transform)?;
        let key = self.objects.insert(object);

        cull_debug!("culling::Scene", "Created object {:?} at {}", key, transform.translation);
        Ok(key)
    }

    /// Remove a SceneObject and return it.
    ///
    /// Dropping the returned object releases its mesh handle.
    /// Returns None if the key is invalid.
    pub fn remove_object(&mut self, key: SceneObjectKey) -> Option<SceneObject> {
        let object = self.objects.remove(key)?;
        cull_debug!("culling::Scene", "Removed object {:?}", key);
        Some(object)
    }

    /// Get a SceneObject by key
    pub fn object(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Get a mutable SceneObject by key
    pub fn object_mut(&mut self, key: SceneObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Set the transform of an object. Returns false if key is invalid.
    pub fn set_transform(&mut self, key: SceneObjectKey, transform: Transform) -> bool {
        if let Some(object) = self.objects.get_mut(key) {
            object.set_transform(transform);
            true
        } else {
            false
        }
    }

    /// Move an object, keeping rotation and scale. Returns false if key is invalid.
    pub fn set_position(&mut self, key: SceneObjectKey, position: Vec3) -> bool {
        if let Some(object) = self.objects.get_mut(key) {
            object.set_position(position);
            true
        } else {
            false
        }
    }

    /// Iterate over all objects with their keys.
    pub fn objects(&self) -> impl Iterator<Item = (SceneObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Iterate mutably over all objects with their keys.
    pub fn objects_mut(&mut self) -> impl Iterator<Item = (SceneObjectKey, &mut SceneObject)> {
        self.objects.iter_mut()
    }

    /// Iterate over all object keys.
    pub fn keys(&self) -> impl Iterator<Item = SceneObjectKey> + '_ {
        self.objects.keys()
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects flagged visible by the last culling pass
    pub fn visible_count(&self) -> usize {
        self.objects.values().filter(|object| object.is_visible()).count()
    }

    /// Remove all objects, releasing their mesh handles.
    pub fn clear(&mut self) {
        let count = self.objects.len();
        self.objects.clear();
        cull_debug!("culling::Scene", "Cleared {} objects", count);
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;

/// Camera culling strategies.
///
/// A CameraCuller decides which SceneObjects are visible from a frustum.
/// Both strategies refresh every object's world AABB and visibility flag;
/// nothing is skipped based on the previous frame.

use crate::camera::Frustum;
use super::scene::Scene;
use super::scene_object::SceneObjectKey;

/// Strategy for determining visible objects.
///
/// Called once per frame by the CullingPipeline, after the camera for the
/// frame is final. Implementations must update each object's world AABB
/// and visibility flag and return the keys of the visible objects.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait CameraCuller: Send + Sync {
    /// Cull the scene against the frustum and return visible object keys.
    fn cull(&mut self, scene: &mut Scene, frustum: &Frustum) -> Vec<SceneObjectKey>;
}

/// Brute-force culler: marks ALL objects visible (no actual culling).
///
/// Used when culling is switched off, and as a baseline for comparison.
/// World AABBs are still refreshed so debug overlays stay correct.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, scene: &mut Scene, _frustum: &Frustum) -> Vec<SceneObjectKey> {
        scene.objects_mut()
            .map(|(key, object)| {
                object.update_world_aabb();
                object.set_visible(true);
                key
            })
            .collect()
    }
}

/// Frustum culler: tests world AABBs against the frustum planes.
///
/// O(n) in the object count, six plane tests per object at most.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, scene: &mut Scene, frustum: &Frustum) -> Vec<SceneObjectKey> {
        scene.objects_mut()
            .filter_map(|(key, object)| {
                let visible = frustum.intersects_aabb(object.update_world_aabb());
                object.set_visible(visible);
                if visible {
                    Some(key)
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;

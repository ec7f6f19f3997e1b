/// VisibilityReport: result of one culling pass.
///
/// Created by `CullingPipeline::run_frame()`. Contains a snapshot of the
/// frustum used for the pass and the keys of the objects that survived it.
///
/// Ephemeral: lives for one frame. No Arc, no Mutex.
/// The per-object flags on the Scene carry the same information; the report
/// is what the renderer and diagnostic overlays consume.

use crate::camera::Frustum;
use super::scene_object::SceneObjectKey;

/// Result of a culling pass. Ephemeral: lives for one frame.
#[derive(Debug, Clone)]
pub struct VisibilityReport {
    frustum: Frustum,
    visible_objects: Vec<SceneObjectKey>,
    total_count: usize,
    frame_index: u64,
    culling_enabled: bool,
}

impl VisibilityReport {
    /// Create a new report (crate-internal: only the pipeline creates these).
    pub(crate) fn new(
        frustum: Frustum,
        visible_objects: Vec<SceneObjectKey>,
        total_count: usize,
        frame_index: u64,
        culling_enabled: bool,
    ) -> Self {
        let mut visible_objects = visible_objects;
        visible_objects.sort_unstable();
        Self {
            frustum,
            visible_objects,
            total_count,
            frame_index,
            culling_enabled,
        }
    }

    /// Frustum snapshot at the time of culling.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Keys of visible SceneObjects, sorted by key.
    pub fn visible_objects(&self) -> &[SceneObjectKey] {
        &self.visible_objects
    }

    /// Whether `key` survived the pass. O(log n) binary search.
    ///
    /// For a per-object walk, `SceneObject::is_visible` is O(1).
    pub fn is_visible(&self, key: SceneObjectKey) -> bool {
        self.visible_objects.binary_search(&key).is_ok()
    }

    /// Number of visible objects.
    pub fn visible_count(&self) -> usize {
        self.visible_objects.len()
    }

    /// Number of objects tested.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of objects rejected.
    pub fn culled_count(&self) -> usize {
        self.total_count.saturating_sub(self.visible_objects.len())
    }

    /// Index of the frame this report belongs to (first frame is 0).
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// False when the pass ran with culling disabled (everything visible).
    pub fn culling_enabled(&self) -> bool {
        self.culling_enabled
    }
}

#[cfg(test)]
#[path = "visibility_report_tests.rs"]
mod tests;

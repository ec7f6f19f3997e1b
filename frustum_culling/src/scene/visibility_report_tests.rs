/// Tests for VisibilityReport

use slotmap::SlotMap;
use glam::Vec3;
use crate::camera::{Camera, ClipRange, Frustum};
use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn create_test_frustum() -> Frustum {
    let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 90.0);
    Frustum::from_camera(&camera, 1.0, &ClipRange::default())
}

fn create_keys(count: usize) -> Vec<SceneObjectKey> {
    let mut map: SlotMap<SceneObjectKey, ()> = SlotMap::with_key();
    (0..count).map(|_| map.insert(())).collect()
}

// ============================================================================
// Counts
// ============================================================================

#[test]
fn test_empty_report() {
    let report = VisibilityReport::new(create_test_frustum(), Vec::new(), 0, 0, true);

    assert_eq!(report.visible_count(), 0);
    assert_eq!(report.total_count(), 0);
    assert_eq!(report.culled_count(), 0);
    assert!(report.visible_objects().is_empty());
}

#[test]
fn test_counts_and_membership() {
    let keys = create_keys(5);
    let report = VisibilityReport::new(
        create_test_frustum(), vec![keys[0], keys[3]], keys.len(), 12, true,
    );

    assert_eq!(report.visible_count(), 2);
    assert_eq!(report.total_count(), 5);
    assert_eq!(report.culled_count(), 3);
    assert_eq!(report.frame_index(), 12);
    assert!(report.is_visible(keys[0]));
    assert!(report.is_visible(keys[3]));
    assert!(!report.is_visible(keys[1]));
    assert!(report.culling_enabled());
}

#[test]
fn test_frustum_snapshot() {
    let frustum = create_test_frustum();
    let report = VisibilityReport::new(frustum, Vec::new(), 0, 0, false);

    assert_eq!(*report.frustum(), frustum);
    assert!(!report.culling_enabled());
}

#[test]
fn test_membership_with_unordered_input() {
    let keys = create_keys(64);
    let visible: Vec<SceneObjectKey> = keys.iter().rev().step_by(3).copied().collect();
    let report = VisibilityReport::new(create_test_frustum(), visible.clone(), keys.len(), 0, true);

    assert!(report.visible_objects().windows(2).all(|pair| pair[0] < pair[1]));
    for key in &keys {
        assert_eq!(report.is_visible(*key), visible.contains(key));
    }
}

// ============================================================================
// Clone
// ============================================================================

#[test]
fn test_report_clone() {
    let keys = create_keys(2);
    let report = VisibilityReport::new(create_test_frustum(), keys.clone(), 2, 1, true);
    let cloned = report.clone();

    assert_eq!(cloned.visible_objects(), report.visible_objects());
    assert_eq!(*cloned.frustum(), *report.frustum());
}

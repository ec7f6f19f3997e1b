/// Tests for SceneObject
///
/// Covers local AABB computation at creation, transform accessors and the
/// per-frame world AABB refresh.

use std::sync::Arc;
use glam::{Quat, Vec3};
use crate::bounds::{AABB, MeshData, MeshSource};
use crate::error::Error;
use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn unit_cube() -> Arc<dyn MeshSource> {
    Arc::new(MeshData::cube("cube", 1.0))
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_new_computes_local_and_world_aabb() {
    let object = SceneObject::new(
        unit_cube(),
        Transform::from_translation(Vec3::new(5.0, 0.0, 0.0)),
    ).unwrap();

    assert_eq!(*object.local_aabb(), AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)));
    assert_eq!(object.world_aabb().center(), Vec3::new(5.0, 0.0, 0.0));
    assert!(object.is_visible());
}

#[test]
fn test_new_rejects_bad_vertex_data() {
    let mesh: Arc<dyn MeshSource> = Arc::new(MeshData::new("broken", vec![1.0, 2.0]));
    // Two floats: zero whole vertices, so this is an empty mesh, not an error
    let empty = SceneObject::new(mesh, Transform::IDENTITY).unwrap();
    assert_eq!(*empty.local_aabb(), AABB::ZERO);

    struct Lying;
    impl MeshSource for Lying {
        fn positions(&self) -> &[f32] {
            &[0.0, 0.0, 0.0]
        }
        fn vertex_count(&self) -> usize {
            2
        }
    }

    match SceneObject::new(Arc::new(Lying), Transform::IDENTITY) {
        Err(Error::InvalidVertexData(_)) => {}
        other => panic!("expected InvalidVertexData, got {:?}", other),
    }
}

#[test]
fn test_object_holds_mesh_reference() {
    let mesh = unit_cube();
    let object = SceneObject::new(mesh.clone(), Transform::IDENTITY).unwrap();
    assert_eq!(Arc::strong_count(&mesh), 2);

    drop(object);
    assert_eq!(Arc::strong_count(&mesh), 1);
}

// ============================================================================
// Transform & World AABB
// ============================================================================

#[test]
fn test_set_position_keeps_rotation_and_scale() {
    let rotation = Quat::from_rotation_z(0.3);
    let mut object = SceneObject::new(
        unit_cube(),
        Transform::IDENTITY.with_rotation(rotation).with_scale(Vec3::splat(2.0)),
    ).unwrap();

    object.set_position(Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(object.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(object.transform().rotation, rotation);
    assert_eq!(object.transform().scale, Vec3::splat(2.0));
}

#[test]
fn test_world_aabb_only_changes_on_update() {
    let mut object = SceneObject::new(unit_cube(), Transform::IDENTITY).unwrap();
    object.set_position(Vec3::new(0.0, 0.0, -20.0));

    assert_eq!(object.world_aabb().center(), Vec3::ZERO);

    let world = *object.update_world_aabb();
    assert_eq!(world.center(), Vec3::new(0.0, 0.0, -20.0));
    assert_eq!(world.size(), Vec3::ONE);
}

#[test]
fn test_world_aabb_uses_scale() {
    let mut object = SceneObject::new(unit_cube(), Transform::IDENTITY).unwrap();
    object.set_transform(Transform::IDENTITY.with_scale(Vec3::new(2.0, 4.0, 6.0)));

    assert_eq!(object.update_world_aabb().size(), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(object.world_matrix(), object.transform().to_matrix());
}

#[test]
fn test_visibility_flag() {
    let mut object = SceneObject::new(unit_cube(), Transform::IDENTITY).unwrap();
    object.set_visible(false);
    assert!(!object.is_visible());
    object.set_visible(true);
    assert!(object.is_visible());
}

#[test]
fn test_debug_output_names_fields() {
    let object = SceneObject::new(unit_cube(), Transform::IDENTITY).unwrap();
    let text = format!("{:?}", object);
    assert!(text.contains("SceneObject"));
    assert!(text.contains("vertex_count: 8"));
    assert!(text.contains("visible: true"));
}

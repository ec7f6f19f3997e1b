/*!
# Frustum Culling

Per-frame view-frustum culling for a scene of meshes.

Each frame the camera snapshot and the current clip range are turned into
six frustum planes, every scene object's local AABB is re-fitted in world
space, and a conservative box-vs-plane test decides whether the object is
potentially visible. The result is written back to the objects and
returned as a `VisibilityReport`.

## Architecture

- **AABB**: local bounds from vertex positions, world bounds from a matrix
- **Frustum**: six inward-facing planes built from a `Camera`
- **Scene**: caller-owned container of `SceneObject`s with stable keys
- **CameraCuller**: culling strategy (`FrustumCuller`, `BruteForceCuller`)
- **CullingPipeline**: per-frame driver producing a `VisibilityReport`

```no_run
use std::sync::Arc;
use frustum_culling::culling::{bounds::MeshData, camera::*, scene::*};
use frustum_culling::glam::Vec3;

let mut scene = Scene::new();
let key = scene.create_object(
    Arc::new(MeshData::cube("cube", 1.0)),
    Transform::from_translation(Vec3::ZERO),
)?;

let camera = Camera::default();
let clip = ClipRange::new(0.1, 100.0)?;
let mut pipeline = CullingPipeline::default();
let report = pipeline.run_frame(&mut scene, &camera, 16.0 / 9.0, &clip);
assert!(report.is_visible(key));
# Ok::<(), frustum_culling::culling::Error>(())
```
*/

// Internal modules
mod error;
pub mod log;
pub mod bounds;
pub mod camera;
pub mod scene;

// Main culling namespace module
pub mod culling {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and configuration, macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Bounding volumes sub-module
    pub mod bounds {
        pub use crate::bounds::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;

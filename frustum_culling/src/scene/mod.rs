//! Scene management module
//!
//! Provides the scene object container, culling strategies, and the
//! per-frame culling pipeline.

mod transform;
mod scene_object;
mod scene;
mod culler;
mod visibility_report;
mod pipeline;

pub use transform::Transform;
pub use scene_object::{SceneObject, SceneObjectKey};
pub use scene::Scene;
pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
pub use visibility_report::VisibilityReport;
pub use pipeline::{CullingPipeline, CullingConfig};

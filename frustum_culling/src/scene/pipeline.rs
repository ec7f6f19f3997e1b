/// Culling pipeline: the per-frame driver.
///
/// Invoked once per rendered frame, after the camera for the frame is
/// final: rebuilds the frustum from the camera snapshot and clip range,
/// then runs the culler over every object in the scene.

use crate::camera::{Camera, ClipRange, Frustum};
use crate::{cull_debug, cull_info, cull_warn};
use super::culler::{BruteForceCuller, CameraCuller, FrustumCuller};
use super::scene::Scene;
use super::visibility_report::VisibilityReport;

/// Culling settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingConfig {
    /// When false, every object is reported visible (debug toggle)
    pub enabled: bool,
    /// Log visible/total at INFO every N frames (0 = never)
    pub stats_log_interval: u32,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stats_log_interval: 60,
        }
    }
}

/// Per-frame culling driver.
///
/// Holds no scene state: the caller owns the Scene and passes it in every
/// frame. The only state kept across frames is the frame counter and
/// whether the last camera was degenerate.
pub struct CullingPipeline {
    config: CullingConfig,
    culler: Box<dyn CameraCuller>,
    fallback: BruteForceCuller,
    frame_index: u64,
    camera_degenerate: bool,
}

impl Default for CullingPipeline {
    fn default() -> Self {
        Self::new(CullingConfig::default())
    }
}

impl CullingPipeline {
    /// Pipeline using the FrustumCuller
    pub fn new(config: CullingConfig) -> Self {
        Self::with_culler(config, Box::new(FrustumCuller::new()))
    }

    /// Pipeline using a custom culling strategy
    pub fn with_culler(config: CullingConfig, culler: Box<dyn CameraCuller>) -> Self {
        Self {
            config,
            culler,
            fallback: BruteForceCuller::new(),
            frame_index: 0,
            camera_degenerate: false,
        }
    }

    pub fn config(&self) -> &CullingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CullingConfig) {
        if config.enabled != self.config.enabled {
            cull_info!("culling::Pipeline", "Culling {}",
                if config.enabled { "enabled" } else { "disabled" });
        }
        self.config = config;
    }

    /// Toggle culling on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.set_config(CullingConfig { enabled, ..self.config });
    }

    /// Number of frames run so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Cull one frame.
    ///
    /// Rebuilds the frustum, refreshes every object's world AABB and
    /// visibility flag, and returns the frame's report.
    ///
    /// A degenerate camera (see [`Camera::is_degenerate`]) has no usable
    /// frustum: the frame is run with culling off so nothing disappears,
    /// and a warning is logged when the camera first becomes degenerate.
    ///
    /// # Arguments
    ///
    /// * `scene` - Objects to cull (flags and world AABBs are updated in place)
    /// * `camera` - Camera snapshot for this frame
    /// * `aspect` - Viewport width / height
    /// * `clip` - Near/far distances (already clamped by the caller)
    pub fn run_frame(
        &mut self,
        scene: &mut Scene,
        camera: &Camera,
        aspect: f32,
        clip: &ClipRange,
    ) -> VisibilityReport {
        let frame_index = self.frame_index;
        self.frame_index += 1;

        let degenerate = camera.is_degenerate();
        if degenerate && !self.camera_degenerate {
            cull_warn!("culling::Pipeline",
                "Degenerate camera (position {}, target {}, up {}), culling skipped",
                camera.position, camera.target, camera.up);
        }
        self.camera_degenerate = degenerate;

        let frustum = Frustum::from_camera(camera, aspect, clip);
        let culling_enabled = self.config.enabled && !degenerate;

        let visible = if culling_enabled {
            self.culler.cull(scene, &frustum)
        } else {
            self.fallback.cull(scene, &frustum)
        };

        let report = VisibilityReport::new(
            frustum, visible, scene.object_count(), frame_index, culling_enabled,
        );
        self.log_stats(&report);
        report
    }

    fn log_stats(&self, report: &VisibilityReport) {
        cull_debug!("culling::Pipeline", "Frame {}: {}/{} visible",
            report.frame_index(), report.visible_count(), report.total_count());

        let interval = u64::from(self.config.stats_log_interval);
        if interval > 0 && (report.frame_index() + 1) % interval == 0 {
            cull_info!("culling::Pipeline", "Visible objects: {}/{} (frame {})",
                report.visible_count(), report.total_count(), report.frame_index());
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

//! Headless frustum culling demo.
//!
//! A grid of cubes seen by an orbiting camera. Runs a fixed number of
//! frames, sweeps the far clip distance in and out, toggles culling off
//! near the end, and logs visible/total counts along the way.
//!
//! Usage: `frustum_culling_demo [frame_count]`

use std::sync::Arc;
use frustum_culling::culling::{
    self,
    bounds::MeshData,
    camera::{Camera, ClipRange, OrbitController, Viewport},
    log::{DefaultLogger, LogSeverity},
    scene::{CullingConfig, CullingPipeline, Scene, Transform},
};
use frustum_culling::glam::Vec3;
use frustum_culling::{cull_error, cull_info};

const DEFAULT_FRAME_COUNT: u64 = 600;
const FRAME_TIME: f32 = 1.0 / 60.0;
const GRID_HALF_SIZE: i32 = 10;
const GRID_SPACING: f32 = 4.0;
const FAR_STEP: f32 = 10.0;
const MIN_FAR: f32 = 20.0;

fn main() {
    culling::log::set_logger(DefaultLogger);
    culling::log::set_min_severity(LogSeverity::Info);

    let frame_count = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(count) => count,
            Err(_) => {
                cull_error!("culling::Demo", "Invalid frame count: {}", arg);
                std::process::exit(2);
            }
        },
        None => DEFAULT_FRAME_COUNT,
    };

    if let Err(error) = run(frame_count) {
        cull_error!("culling::Demo", "Demo failed: {}", error);
        std::process::exit(1);
    }
}

fn run(frame_count: u64) -> culling::Result<()> {
    let viewport = Viewport::new(800, 600)?;
    let mut camera = Camera::default();
    let orbit = OrbitController::default();
    let mut clip = ClipRange::new(0.1, 1000.0)?;

    let mut scene = build_scene()?;
    cull_info!("culling::Demo", "{} objects in scene, {} frames",
        scene.object_count(), frame_count);

    let mut pipeline = CullingPipeline::new(CullingConfig::default());
    let mut min_visible = usize::MAX;
    let mut max_visible = 0;

    for frame in 0..frame_count {
        orbit.update(&mut camera, FRAME_TIME);

        // Scripted input: pull the far plane in, push it back out,
        // then switch culling off for the last frames
        let phase = script_phase(frame, frame_count);
        match phase {
            2 => clip = clip.with_far((clip.far() - FAR_STEP).max(MIN_FAR)),
            3 => clip = clip.with_far(clip.far() + FAR_STEP),
            _ => {}
        }
        if phase == 5 && pipeline.config().enabled {
            pipeline.set_enabled(false);
        }

        let report = pipeline.run_frame(&mut scene, &camera, viewport.aspect_ratio(), &clip);
        if report.culling_enabled() {
            min_visible = min_visible.min(report.visible_count());
            max_visible = max_visible.max(report.visible_count());
        }
    }

    if max_visible > 0 {
        cull_info!("culling::Demo", "Visible range with culling: {}..={} of {}",
            min_visible, max_visible, scene.object_count());
    }
    Ok(())
}

/// Which sixth of the run `frame` falls in (0..=5).
fn script_phase(frame: u64, frame_count: u64) -> u64 {
    let phase = u128::from(frame) * 6 / u128::from(frame_count.max(1));
    phase.min(5) as u64
}

/// Unit cubes resting on the ground plane, one every `GRID_SPACING` units.
fn build_scene() -> culling::Result<Scene> {
    let cube = Arc::new(MeshData::cube("cube", 1.0));
    let mut scene = Scene::new();

    for x in -GRID_HALF_SIZE..=GRID_HALF_SIZE {
        for z in -GRID_HALF_SIZE..=GRID_HALF_SIZE {
            let position = Vec3::new(x as f32 * GRID_SPACING, 0.5, z as f32 * GRID_SPACING);
            scene.create_object(cube.clone(), Transform::from_translation(position))?;
        }
    }

    Ok(scene)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

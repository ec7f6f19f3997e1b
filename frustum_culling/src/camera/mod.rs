//! Camera module: camera snapshot, clip range, frustum, and orbit control.
//!
//! Cameras are plain values owned and driven by the caller. The culling
//! pipeline only reads a snapshot of the camera once per frame.

mod camera;
mod frustum;
mod orbit_controller;

pub use camera::{Camera, Projection, ClipRange, Viewport};
pub use frustum::{
    Frustum, Plane,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orbit_controller::OrbitController;

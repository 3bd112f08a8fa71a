//! Timeline-driven camera path.
//!
//! The camera never responds to input; its pose is a pure function of the
//! playhead, so the whole scene stays deterministic and testable.

use std::f32::consts::TAU;
use crate::math::Vec3;

/// Camera eye distance from the scene origin
const EYE_DISTANCE: f32 = 25.0;
/// Vertical bob amplitude, two cycles per timeline loop
const BOB_AMPLITUDE: f32 = 1.0;
/// Horizontal sweep radius of the look target
const TARGET_SWEEP_X: f32 = 2.0;
const TARGET_SWEEP_Z: f32 = 10.0;

/// Computes the camera pose for a given playhead
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraRig;

impl CameraRig {
    /// (eye, look target) for the given playhead
    pub fn pose(playhead: f32) -> (Vec3, Vec3) {
        let eye = Vec3::new(
            0.0,
            (2.0 * TAU * playhead).sin() * BOB_AMPLITUDE,
            EYE_DISTANCE,
        );
        let target = Vec3::new(
            -(TAU * playhead).sin() * TARGET_SWEEP_X,
            0.0,
            (TAU * playhead).cos() * TARGET_SWEEP_Z,
        );
        (eye, target)
    }
}

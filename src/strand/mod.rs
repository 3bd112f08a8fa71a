//! Strand construction and per-frame twist animation.
//!
//! A strand is an ordered run of rungs placed along a helix curve at build
//! time. Placement never changes afterwards; the playhead only re-derives
//! each rung's twist angle from its stored initial angle.

pub mod rung;

use std::f32::consts::PI;
use crate::math::{HelixCurve, Mat4, Vec3};

pub use rung::Rung;

pub const DEFAULT_RUNG_TOTAL: usize = 80;

/// An ordered sequence of positioned and oriented rungs
#[derive(Debug, Clone)]
pub struct Strand {
    rungs: Vec<Rung>,
    offset: Vec3,
}

impl Strand {
    /// Place `total` rungs along the curve.
    ///
    /// Sampling is 1-indexed: rung i sits at t = i/total, so the first rung
    /// is at 1/total rather than 0, and the look-ahead sample for the final
    /// rung lands past t = 1. Both quirks are intentional; the curve is
    /// unclamped and the rendered geometry depends on them.
    pub fn build(curve: &HelixCurve, total: usize, offset: Vec3) -> Self {
        let mut rungs = Vec::with_capacity(total);

        for i in 1..=total {
            let initial_twist = PI * (i as f32 / 10.0);

            let anchor = curve.point(i as f32 / total as f32);
            let ahead = curve.point((i + 1) as f32 / total as f32);
            let orientation = Mat4::look_rotation(ahead - anchor, Vec3::UP);

            rungs.push(Rung::new(anchor, orientation, initial_twist));
        }

        Self { rungs, offset }
    }

    /// Re-derive every rung's twist from the playhead. Overwrites, never
    /// accumulates: update(p) twice equals update(p) once.
    pub fn update(&mut self, playhead: f32) {
        for rung in &mut self.rungs {
            rung.set_twist(rung.initial_twist() - PI * playhead);
        }
    }

    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    pub fn rung_count(&self) -> usize {
        self.rungs.len()
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// World transforms for all rungs, offset applied
    pub fn model_matrices(&self) -> impl Iterator<Item = Mat4> + '_ {
        self.rungs.iter().map(|r| r.model_matrix(self.offset))
    }
}

/// A strand in the scene, with its twist rate and visibility.
///
/// Every instance is twisted each frame whether drawn or not; the rate
/// multiplier is applied here so `Strand::update` stays a pure function of
/// one scalar.
#[derive(Debug, Clone)]
pub struct StrandInstance {
    pub strand: Strand,
    pub twist_rate: f32,
    pub visible: bool,
}

impl StrandInstance {
    pub fn new(strand: Strand, twist_rate: f32, visible: bool) -> Self {
        Self {
            strand,
            twist_rate,
            visible,
        }
    }

    pub fn update(&mut self, playhead: f32) {
        self.strand.update(playhead * self.twist_rate);
    }
}

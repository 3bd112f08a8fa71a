use std::f32::consts::PI;
use serde::{Serialize, Deserialize};
use super::Vec3;

/// The closed set of helix variants, differing only in embedded constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelixKind {
    /// One half-turn per unit t, rise 5
    Primary,
    /// One full turn per unit t, rise 10
    Double,
    /// 1.4 turns per unit t, rise 15, winding reversed
    Reverse,
}

impl HelixKind {
    /// (angular frequency in units of PI, vertical rise, horizontal sign)
    fn constants(self) -> (f32, f32, f32) {
        match self {
            HelixKind::Primary => (1.0, 5.0, 1.0),
            HelixKind::Double => (2.0, 10.0, 1.0),
            HelixKind::Reverse => (2.8, 15.0, -1.0),
        }
    }
}

/// Parametric helix curve: a pure function of normalized progress t
#[derive(Debug, Clone, Copy)]
pub struct HelixCurve {
    kind: HelixKind,
    scale: f32,
}

impl HelixCurve {
    pub fn new(kind: HelixKind, scale: f32) -> Self {
        Self { kind, scale }
    }

    /// Evaluate the curve at t. The domain is nominally [0, 1] but t is
    /// deliberately unclamped; values past the end extrapolate the same
    /// trigonometric formula.
    pub fn point(&self, t: f32) -> Vec3 {
        let (frequency, rise, sign) = self.kind.constants();
        let angle = frequency * PI * t;
        Vec3::new(sign * angle.sin(), rise * t, sign * angle.cos()) * self.scale
    }

    pub fn kind(&self) -> HelixKind {
        self.kind
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

use crate::math::{Mat4, Vec3};

/// One cross-bar unit placed along the strand curve.
///
/// Position and orientation are fixed at build time; only the twist angle
/// changes per frame.
#[derive(Debug, Clone)]
pub struct Rung {
    /// Anchor point on the curve
    position: Vec3,
    /// Look-at basis facing the next curve sample
    orientation: Mat4,
    /// Twist angle recorded at build time (radians)
    initial_twist: f32,
    /// Current twist angle about the local forward axis
    twist: f32,
}

impl Rung {
    pub fn new(position: Vec3, orientation: Mat4, initial_twist: f32) -> Self {
        Self {
            position,
            orientation,
            initial_twist,
            twist: initial_twist,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn initial_twist(&self) -> f32 {
        self.initial_twist
    }

    pub fn twist(&self) -> f32 {
        self.twist
    }

    /// Overwrite the twist angle. Not additive; the caller supplies the
    /// absolute angle for the current frame.
    pub fn set_twist(&mut self, twist: f32) {
        self.twist = twist;
    }

    /// World transform for the rung template geometry:
    /// translate to the (offset) anchor, face the look-ahead point, then
    /// spin about the local forward axis.
    pub fn model_matrix(&self, strand_offset: Vec3) -> Mat4 {
        Mat4::translation(strand_offset + self.position)
            .mul(&self.orientation)
            .mul(&Mat4::rotation_z(self.twist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_twist_overwrite() {
        let mut rung = Rung::new(Vec3::ZERO, Mat4::identity(), PI / 10.0);
        assert_eq!(rung.twist(), rung.initial_twist());

        rung.set_twist(1.0);
        rung.set_twist(0.25);
        assert_eq!(rung.twist(), 0.25);
        assert!((rung.initial_twist() - PI / 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_model_matrix_applies_offset() {
        let rung = Rung::new(Vec3::new(1.0, 2.0, 3.0), Mat4::identity(), 0.0);
        let m = rung.model_matrix(Vec3::new(10.0, 0.0, 0.0));
        let origin = m.transform_point(Vec3::ZERO);
        assert!((origin.x - 11.0).abs() < 1e-5);
        assert!((origin.y - 2.0).abs() < 1e-5);
        assert!((origin.z - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_model_matrix_twist_is_local() {
        // With identity orientation the twist spins points in the XY plane
        let mut rung = Rung::new(Vec3::ZERO, Mat4::identity(), 0.0);
        rung.set_twist(PI / 2.0);
        let m = rung.model_matrix(Vec3::ZERO);
        let p = m.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!((p.x + 1.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }
}

use super::Vec3;

/// 4x4 matrix for transformations (column-major for WebGL)
#[derive(Debug, Clone, Copy)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::identity();
        m.data[12] = v.x;
        m.data[13] = v.y;
        m.data[14] = v.z;
        m
    }

    /// Rotation about the local Z axis (the rung twist axis)
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Create rotation matrix whose +Z axis points along `forward`
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize();
        let r = up.cross(&f).normalize();
        let u = f.cross(&r);

        Self {
            data: [
                r.x, u.x, f.x, 0.0,
                r.y, u.y, f.y, 0.0,
                r.z, u.z, f.z, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Perspective projection matrix
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            data: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Look-at view matrix
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(&up).normalize();
        let u = r.cross(&f);

        Self {
            data: [
                r.x, u.x, -f.x, 0.0,
                r.y, u.y, -f.y, 0.0,
                r.z, u.z, -f.z, 0.0,
                -r.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0,
            ],
        }
    }

    /// Matrix multiplication; `other` is applied first
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    /// Get as slice for WebGL
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = Mat4::identity();
        assert_eq!(m.data[0], 1.0);
        assert_eq!(m.data[5], 1.0);
        assert_eq!(m.data[10], 1.0);
        assert_eq!(m.data[15], 1.0);
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let result = m.transform_point(Vec3::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!((result.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_rotation_z() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let result = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x).abs() < 0.0001);
        assert!((result.y - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_look_rotation_forward() {
        // Forward axis of the rotated frame should point at the target direction
        let m = Mat4::look_rotation(Vec3::new(1.0, 0.0, 0.0), Vec3::UP);
        let fwd = m.transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert!((fwd.x - 1.0).abs() < 0.0001);
        assert!(fwd.y.abs() < 0.0001);
        assert!(fwd.z.abs() < 0.0001);
    }

    #[test]
    fn test_look_rotation_orthonormal() {
        let m = Mat4::look_rotation(Vec3::new(0.3, 0.5, -0.8), Vec3::UP);
        let x = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        let y = m.transform_point(Vec3::new(0.0, 1.0, 0.0));
        let z = m.transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert!((x.length() - 1.0).abs() < 0.0001);
        assert!((y.length() - 1.0).abs() < 0.0001);
        assert!((z.length() - 1.0).abs() < 0.0001);
        assert!(x.dot(&y).abs() < 0.0001);
        assert!(x.dot(&z).abs() < 0.0001);
    }

    #[test]
    fn test_matrix_mul_order() {
        let t = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
        let r = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        // Rotate first, then translate
        let combined = t.mul(&r);
        let result = combined.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 1.0).abs() < 0.0001);
    }
}

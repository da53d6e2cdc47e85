use vecmath_linalg::svd2;

use crate::scalar;
use crate::tuple::Vector2f;

define_matrix_type!(
    /// A 2x2 matrix.
    Matrix2f, glam::Mat2, 2, [[m00, m01], [m10, m11]]
);
impl_matrix_inverse!(Matrix2f);

impl Matrix2f {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// `scale` times the identity.
    #[inline]
    pub fn from_scale(scale: f32) -> Self {
        Self::from_diagonal([scale; 2])
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_rotation(angle: f32) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(c, -s, s, c)
    }

    /// The determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    fn adjugate_scaled(&self, inv_det: f32) -> Self {
        Self::new(
            self.m11 * inv_det,
            -self.m01 * inv_det,
            -self.m10 * inv_det,
            self.m00 * inv_det,
        )
    }

    /// Singular values in descending order and the orthogonal factor `U * V^T` of the SVD.
    pub fn get_scale_rotate(&self) -> (Vector2f, Matrix2f) {
        let svd = svd2(&glam::Mat2::from(*self).as_dmat2());
        let s = svd.s().as_vec2();
        let rot = Self::from(svd.orthogonal_factor().as_mat2());
        (Vector2f::new(s.x, s.y), rot)
    }

    /// Singular values in descending order.
    #[inline]
    pub fn get_scale(&self) -> Vector2f {
        self.get_scale_rotate().0
    }

    /// Largest singular value.
    #[inline]
    pub fn max_scale(&self) -> f32 {
        self.get_scale().x
    }

    /// The orthogonal matrix closest to `self`.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.get_scale_rotate().1
    }

    /// `(self * rhs).normalize()`.
    #[inline]
    pub fn mul_normalize(&self, rhs: &Self) -> Self {
        (*self * *rhs).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VecmathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse() -> Result<(), VecmathError> {
        let m = Matrix2f::new(4.0, 7.0, 2.0, 6.0);
        assert_relative_eq!(m.determinant(), 10.0);
        let inv = m.inverse()?;
        assert_relative_eq!(inv, Matrix2f::new(0.6, -0.7, -0.2, 0.4), epsilon = 1e-6);
        assert_relative_eq!(m * inv, Matrix2f::IDENTITY, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_singular_is_rejected() {
        let mut m = Matrix2f::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(m.inverse(), Err(VecmathError::SingularMatrix(0.0)));
        assert!(m.invert().is_err());
        assert_eq!(m, Matrix2f::new(1.0, 2.0, 2.0, 4.0));
    }

    #[test]
    fn test_rotation() {
        let r = Matrix2f::from_rotation(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(
            r.transform(Vector2f::new(1.0, 0.0)),
            Vector2f::new(0.0, 1.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_scale_rotate() {
        let r = Matrix2f::from_rotation(0.4);
        let m = r * Matrix2f::from_diagonal([3.0, 2.0]);
        let (s, rot) = m.get_scale_rotate();
        assert_relative_eq!(s, Vector2f::new(3.0, 2.0), epsilon = 1e-5);
        assert_relative_eq!(rot, r, epsilon = 1e-5);
        assert_relative_eq!(m.max_scale(), 3.0, epsilon = 1e-5);
        assert_relative_eq!(m.mul_normalize(&Matrix2f::IDENTITY), r, epsilon = 1e-5);
    }

    #[test]
    fn test_accessors_and_display() -> Result<(), VecmathError> {
        let mut m = Matrix2f::IDENTITY;
        m.set_column(1, Vector2f::new(5.0, 6.0))?;
        assert_eq!(m.row(0)?, [1.0, 5.0]);
        assert_eq!(m.column(1)?, [5.0, 6.0]);
        assert_eq!(m.element(1, 1)?, 6.0);
        assert_eq!(m.element(2, 0), Err(VecmathError::IndexOutOfRange(2, 2)));
        assert_eq!(m.to_string(), "1, 5\n0, 6\n");
        assert_eq!(m.scale_columns([2.0, 0.5]), Matrix2f::new(2.0, 2.5, 0.0, 3.0));
        Ok(())
    }
}

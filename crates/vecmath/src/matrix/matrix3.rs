use vecmath_linalg::svd3;

use crate::axis_angle::AxisAngle4f;
use crate::matrix::Matrix4f;
use crate::quat::Quat4f;
use crate::scalar::{self, AXIS_EPSILON, GOOD_MATRIX3_EPSILON};
use crate::tuple::Vector3f;

define_matrix_type!(
    /// A 3x3 matrix, usually a rotation or a rotation with scale.
    Matrix3f, glam::Mat3, 3, [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]]
);
impl_matrix_inverse!(Matrix3f);

impl Matrix3f {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// `scale` times the identity.
    #[inline]
    pub fn from_scale(scale: f32) -> Self {
        Self::from_diagonal([scale; 3])
    }

    /// Counter-clockwise rotation about the x axis by `angle` radians.
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Counter-clockwise rotation about the y axis by `angle` radians.
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Counter-clockwise rotation about the z axis by `angle` radians.
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// The rotation matrix of a quaternion, which need not be unit length.
    ///
    /// The layout follows Watt & Watt, `m01 = 2(xy + wz)`, and is the exact inverse of
    /// [`Quat4f::from_matrix3`]. The zero quaternion maps to the identity.
    pub fn from_quat(q: Quat4f) -> Self {
        let n = q.length_squared();
        let s = if n > 0.0 { 2.0 / n } else { 0.0 };

        let (xs, ys, zs) = (q.x * s, q.y * s, q.z * s);
        let (wx, wy, wz) = (q.w * xs, q.w * ys, q.w * zs);
        let (xx, xy, xz) = (q.x * xs, q.x * ys, q.x * zs);
        let (yy, yz, zz) = (q.y * ys, q.y * zs, q.z * zs);

        Self::new(
            1.0 - (yy + zz),
            xy + wz,
            xz - wy,
            xy - wz,
            1.0 - (xx + zz),
            yz + wx,
            xz + wy,
            yz - wx,
            1.0 - (xx + yy),
        )
    }

    /// Counter-clockwise rotation by `a.angle` about the axis of `a`.
    ///
    /// An axis shorter than [`AXIS_EPSILON`] gives the identity.
    pub fn from_axis_angle(a: AxisAngle4f) -> Self {
        let mag = scalar::sqrt(a.x * a.x + a.y * a.y + a.z * a.z);
        if mag < AXIS_EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / mag;
        let (ax, ay, az) = (a.x * inv, a.y * inv, a.z * inv);

        let (s, c) = (scalar::sin(a.angle), scalar::cos(a.angle));
        let t = 1.0 - c;
        let (xy, xz, yz) = (ax * ay, ax * az, ay * az);

        Self::new(
            t * ax * ax + c,
            t * xy - s * az,
            t * xz + s * ay,
            t * xy + s * az,
            t * ay * ay + c,
            t * yz - s * ax,
            t * xz - s * ay,
            t * yz + s * ax,
            t * az * az + c,
        )
    }

    /// The upper-left 3x3 block of `m`.
    pub fn from_matrix4(m: &Matrix4f) -> Self {
        Self::new(
            m.m00, m.m01, m.m02, m.m10, m.m11, m.m12, m.m20, m.m21, m.m22,
        )
    }

    /// The determinant, by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        self.m00 * (self.m11 * self.m22 - self.m12 * self.m21)
            + self.m01 * (self.m12 * self.m20 - self.m10 * self.m22)
            + self.m02 * (self.m10 * self.m21 - self.m11 * self.m20)
    }

    fn adjugate_scaled(&self, inv_det: f32) -> Self {
        let m = self;
        Self::new(
            (m.m11 * m.m22 - m.m12 * m.m21) * inv_det,
            (m.m02 * m.m21 - m.m01 * m.m22) * inv_det,
            (m.m01 * m.m12 - m.m02 * m.m11) * inv_det,
            (m.m12 * m.m20 - m.m10 * m.m22) * inv_det,
            (m.m00 * m.m22 - m.m02 * m.m20) * inv_det,
            (m.m02 * m.m10 - m.m00 * m.m12) * inv_det,
            (m.m10 * m.m21 - m.m11 * m.m20) * inv_det,
            (m.m01 * m.m20 - m.m00 * m.m21) * inv_det,
            (m.m00 * m.m11 - m.m01 * m.m10) * inv_det,
        )
    }

    /// Singular values in descending order and the orthogonal factor `U * V^T` of the SVD.
    ///
    /// The orthogonal factor is not sign corrected: if `self` contains a reflection so does the
    /// returned matrix.
    pub fn get_scale_rotate(&self) -> (Vector3f, Matrix3f) {
        let svd = svd3(&glam::Mat3::from(*self).as_dmat3());
        let s = svd.s().as_vec3();
        let rot = Self::from(svd.orthogonal_factor().as_mat3());
        (Vector3f::from(s), rot)
    }

    /// Singular values in descending order.
    #[inline]
    pub fn get_scale(&self) -> Vector3f {
        self.get_scale_rotate().0
    }

    /// Largest singular value.
    #[inline]
    pub fn max_scale(&self) -> f32 {
        self.get_scale().x
    }

    /// The orthogonal matrix closest to `self` in the Frobenius norm.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.get_scale_rotate().1
    }

    /// `(self * rhs).normalize()`.
    #[inline]
    pub fn mul_normalize(&self, rhs: &Self) -> Self {
        (*self * *rhs).normalize()
    }

    /// Cross product normalization.
    ///
    /// Columns 0 and 1 are scaled to unit length and column 2 becomes their cross product. The
    /// result is only orthogonal if the first two columns already were; zero columns stay zero.
    pub fn normalize_cp(&self) -> Self {
        let c0 = Vector3f::new(self.m00, self.m10, self.m20).normalize();
        let c1 = Vector3f::new(self.m01, self.m11, self.m21).normalize();
        let c2 = c0.cross(c1);
        Self::new(c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z)
    }

    /// Replace the scale with a uniform `scale`, keeping the rotation of the SVD.
    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        *self = self.normalize() * scale;
        self
    }

    /// Replace the scale, multiplying row `r` of the rotation of the SVD by `scale[r]`.
    pub fn set_scale_components(&mut self, scale: impl Into<[f32; 3]>) -> &mut Self {
        *self = self.normalize().scale_rows(scale);
        self
    }

    /// `true` if every element is finite and `|det| >= GOOD_MATRIX3_EPSILON`.
    pub fn is_good_matrix(&self) -> bool {
        self.is_finite() && self.determinant().abs() >= GOOD_MATRIX3_EPSILON
    }
}

impl From<Quat4f> for Matrix3f {
    #[inline]
    fn from(q: Quat4f) -> Self {
        Self::from_quat(q)
    }
}

impl From<AxisAngle4f> for Matrix3f {
    #[inline]
    fn from(a: AxisAngle4f) -> Self {
        Self::from_axis_angle(a)
    }
}

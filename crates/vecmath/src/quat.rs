//! Quaternions.
//!
//! A [`Quat4f`] stores `x i + y j + z k + w`. Rotations are expected to be unit length; only
//! [`Quat4f::new`] and [`Quat4f::normalize`] enforce it, products accumulate drift.
//!
//! The matrix conversions use the Watt & Watt layout, in which [`Matrix3f::from_quat`] of
//! [`Quat4f::from_axis_angle`] is the transpose of [`Matrix3f::from_axis_angle`]. The two
//! directions of the conversion are exact inverses of each other up to the sign of the
//! quaternion.

use crate::axis_angle::AxisAngle4f;
use crate::matrix::{Matrix3f, Matrix4f};
use crate::scalar::{self, QUAT_EPSILON};

define_tuple_type!(
    /// A quaternion, `w` is the scalar part.
    Quat4f, glam::Vec4, [f32; 4], from_xyzw, [x, y, z, w]
);

/// Cyclic successor of a diagonal index.
const NEXT_AXIS: [usize; 3] = [1, 2, 0];

impl Quat4f {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::from_xyzw(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion scaled to unit length. The zero quaternion stays zero.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_xyzw(x, y, z, w).normalize()
    }

    /// `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, self.w)
    }

    /// The multiplicative inverse, the conjugate divided by the squared norm.
    ///
    /// Non-finite for the zero quaternion.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.length_squared())
    }

    /// `self * rhs.inverse()`.
    #[inline]
    pub fn mul_inverse(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }

    /// The rotation of a 3x3 matrix, which must be a pure rotation.
    pub fn from_matrix3(m: &Matrix3f) -> Self {
        let rows = m.to_rows();
        let trace = m.m00 + m.m11 + m.m22;
        if trace > 0.0 {
            let s = scalar::sqrt(trace + 1.0);
            let w = s * 0.5;
            let s = 0.5 / s;
            return Self::from_xyzw(
                (m.m12 - m.m21) * s,
                (m.m20 - m.m02) * s,
                (m.m01 - m.m10) * s,
                w,
            );
        }

        // largest diagonal element picks the component computed from the square root
        let mut i = 0;
        if m.m11 > m.m00 {
            i = 1;
        }
        if m.m22 > rows[i][i] {
            i = 2;
        }
        let j = NEXT_AXIS[i];
        let k = NEXT_AXIS[j];

        let s = scalar::sqrt(rows[i][i] - (rows[j][j] + rows[k][k]) + 1.0);
        let mut q = [0.0; 4];
        q[i] = s * 0.5;
        let s = 0.5 / s;
        q[3] = (rows[j][k] - rows[k][j]) * s;
        q[j] = (rows[i][j] + rows[j][i]) * s;
        q[k] = (rows[i][k] + rows[k][i]) * s;
        Self::from_array(q)
    }

    /// The rotation of the upper 3x3 block of `m`, used as is.
    #[inline]
    pub fn from_matrix4(m: &Matrix4f) -> Self {
        Self::from_matrix3(&Matrix3f::from_matrix4(m))
    }

    /// `(sin(angle / 2) * axis / |axis|, cos(angle / 2))`.
    ///
    /// An axis shorter than [`QUAT_EPSILON`] gives the identity.
    pub fn from_axis_angle(a: AxisAngle4f) -> Self {
        let amag = scalar::sqrt(a.x * a.x + a.y * a.y + a.z * a.z);
        if amag < QUAT_EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / amag;
        let half = a.angle * 0.5;
        let s = scalar::sin(half);
        Self::from_xyzw(a.x * inv * s, a.y * inv * s, a.z * inv * s, scalar::cos(half))
    }

    /// Spherical linear interpolation from `self` (`alpha = 0`) to `rhs` (`alpha = 1`).
    ///
    /// Nearly equal quaternions are blended linearly. For nearly opposite quaternions the path
    /// runs through a quaternion perpendicular to `self`, reached at `alpha = 0.5`, and still
    /// ends on `rhs`.
    pub fn slerp(self, rhs: Self, alpha: f32) -> Self {
        let cosom = self.dot(rhs);

        if 1.0 + cosom > QUAT_EPSILON {
            let (sclp, sclq) = if 1.0 - cosom > QUAT_EPSILON {
                let omega = scalar::acos(cosom);
                let sinom = scalar::sin(omega);
                (
                    scalar::sin((1.0 - alpha) * omega) / sinom,
                    scalar::sin(alpha * omega) / sinom,
                )
            } else {
                (1.0 - alpha, alpha)
            };
            self * sclp + rhs * sclq
        } else {
            // two quarter turns, self to perp to rhs
            let perp = Self::from_xyzw(-self.y, self.x, -self.w, self.z);
            let half_pi = std::f32::consts::FRAC_PI_2;
            let (from, to, t) = if alpha <= 0.5 {
                (self, perp, 2.0 * alpha)
            } else {
                (perp, rhs, 2.0 * alpha - 1.0)
            };
            from * scalar::sin((1.0 - t) * half_pi) + to * scalar::sin(t * half_pi)
        }
    }
}

impl Default for Quat4f {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The Hamilton product.
impl std::ops::Mul for Quat4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_xyzw(
            self.w * rhs.x + rhs.w * self.x + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + rhs.w * self.y - self.x * rhs.z + self.z * rhs.x,
            self.w * rhs.z + rhs.w * self.z + self.x * rhs.y - self.y * rhs.x,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl std::ops::MulAssign for Quat4f {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<glam::Quat> for Quat4f {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat4f> for glam::Quat {
    #[inline]
    fn from(q: Quat4f) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<&Matrix3f> for Quat4f {
    #[inline]
    fn from(m: &Matrix3f) -> Self {
        Self::from_matrix3(m)
    }
}

impl From<AxisAngle4f> for Quat4f {
    #[inline]
    fn from(a: AxisAngle4f) -> Self {
        Self::from_axis_angle(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn same_rotation(a: Quat4f, b: Quat4f, epsilon: f32) -> bool {
        a.epsilon_equals(&b, epsilon) || a.epsilon_equals(&-b, epsilon)
    }

    #[test]
    fn test_hamilton_product() {
        let i = Quat4f::from_xyzw(1.0, 0.0, 0.0, 0.0);
        let j = Quat4f::from_xyzw(0.0, 1.0, 0.0, 0.0);
        let k = Quat4f::from_xyzw(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quat4f::from_xyzw(0.0, 0.0, 0.0, -1.0));
        assert_eq!(Quat4f::IDENTITY * k, k);

        let a = Quat4f::new(0.3, -0.2, 0.5, 0.8);
        let b = Quat4f::new(-0.1, 0.7, 0.2, 0.4);
        let glam_ab = glam::Quat::from(a) * glam::Quat::from(b);
        assert_relative_eq!(a * b, Quat4f::from(glam_ab), epsilon = 1e-6);
    }

    #[test]
    fn test_new_normalizes() {
        let q = Quat4f::new(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(q, Quat4f::from_xyzw(0.0, 0.0, 0.6, 0.8));
        assert_eq!(Quat4f::new(0.0, 0.0, 0.0, 0.0), Quat4f::ZERO);
        assert_eq!(Quat4f::default(), Quat4f::IDENTITY);
    }

    #[test]
    fn test_inverse() {
        let q = Quat4f::from_xyzw(1.0, 2.0, -1.0, 3.0);
        assert_relative_eq!(q * q.inverse(), Quat4f::IDENTITY, epsilon = 1e-6);
        assert_relative_eq!(q.mul_inverse(q), Quat4f::IDENTITY, epsilon = 1e-6);
        let unit = q.normalize();
        assert_relative_eq!(unit.inverse(), unit.conjugate(), epsilon = 1e-6);
        // non-unit: conjugate and inverse differ
        assert!(!q.inverse().epsilon_equals(&q.conjugate(), 1e-3));
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quat4f::from_axis_angle(AxisAngle4f::new(0.0, 0.0, 2.0, FRAC_PI_2));
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(q, Quat4f::from_xyzw(0.0, 0.0, h, h), epsilon = 1e-6);
        assert_eq!(
            Quat4f::from_axis_angle(AxisAngle4f::new(0.0, 0.0, 0.0, 1.0)),
            Quat4f::IDENTITY
        );
    }

    #[test]
    fn test_matrix_round_trip_all_branches() {
        // positive trace, then each of the three diagonal branches
        let axes = [
            AxisAngle4f::new(1.0, 2.0, 3.0, 0.4),
            AxisAngle4f::new(1.0, 0.0, 0.0, 3.0),
            AxisAngle4f::new(0.1, 1.0, 0.0, 3.0),
            AxisAngle4f::new(0.0, 0.2, 1.0, 3.1),
            AxisAngle4f::new(1.0, 1.0, 1.0, PI),
        ];
        for aa in axes {
            let q = Quat4f::from_axis_angle(aa);
            let back = Quat4f::from_matrix3(&Matrix3f::from_quat(q));
            assert!(same_rotation(q, back, 1e-5), "{q} vs {back}");
            let back4 = Quat4f::from_matrix4(&Matrix4f::from_quat(q));
            assert!(same_rotation(q, back4, 1e-5), "{q} vs {back4}");
        }
    }

    #[test]
    fn test_identity_from_matrix() {
        assert_eq!(Quat4f::from_matrix3(&Matrix3f::IDENTITY), Quat4f::IDENTITY);
        let q = Quat4f::from_matrix4(&Matrix4f::from_quat(Quat4f::IDENTITY));
        assert_eq!(q, Quat4f::IDENTITY);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quat4f::from_axis_angle(AxisAngle4f::new(0.0, 1.0, 0.0, 0.3));
        let b = Quat4f::from_axis_angle(AxisAngle4f::new(1.0, 0.0, 1.0, 1.2));
        assert_relative_eq!(a.slerp(b, 0.0), a, epsilon = 1e-6);
        assert_relative_eq!(a.slerp(b, 1.0), b, epsilon = 1e-6);
        for alpha in [0.0, 0.25, 0.5, 1.0] {
            assert_relative_eq!(a.slerp(a, alpha), a, epsilon = 1e-6);
            assert_relative_eq!(a.slerp(b, alpha).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_slerp_halfway_angle() {
        let a = Quat4f::IDENTITY;
        let b = Quat4f::from_axis_angle(AxisAngle4f::new(0.0, 0.0, 1.0, FRAC_PI_2));
        let mid = a.slerp(b, 0.5);
        let expected = Quat4f::from_axis_angle(AxisAngle4f::new(0.0, 0.0, 1.0, FRAC_PI_2 / 2.0));
        assert_relative_eq!(mid, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_slerp_antipodal() {
        let a = Quat4f::from_xyzw(0.0, 0.0, 0.0, 1.0);
        let b = -a;
        assert_relative_eq!(a.slerp(b, 0.0), a, epsilon = 1e-6);
        assert_relative_eq!(a.slerp(b, 1.0), b, epsilon = 1e-6);
        // halfway lands on the perpendicular
        let mid = a.slerp(b, 0.5);
        assert_abs_diff_eq!(mid.dot(a), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mid.length(), 1.0, epsilon = 1e-6);
        for alpha in [0.1, 0.3, 0.7, 0.9] {
            assert_abs_diff_eq!(a.slerp(b, alpha).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_slerp_antipodal_ends_on_target() {
        let a = Quat4f::new(0.0, 0.389, 0.0, 0.921);
        let b = -a;
        assert_relative_eq!(a.slerp(b, 1.0), b, epsilon = 1e-6);
        assert_relative_eq!(a.slerp(b, 0.0), a, epsilon = 1e-6);
        // the path is continuous through the midpoint
        let before = a.slerp(b, 0.499);
        let after = a.slerp(b, 0.501);
        assert!(before.distance(after) < 1e-2);
    }

    #[test]
    fn test_glam_conversion() {
        let q = Quat4f::new(0.1, 0.2, 0.3, 0.9);
        let g: glam::Quat = q.into();
        assert_eq!(Quat4f::from(g), q);
        let v = glam::Vec3::new(1.0, -2.0, 0.5);
        let m = Matrix3f::from_quat(q);
        // glam rotates with the transpose of the Watt & Watt layout
        let rotated = glam::Mat3::from(m.transpose()) * v;
        assert_relative_eq!(rotated.x, (g * v).x, epsilon = 1e-5);
        assert_relative_eq!(rotated.y, (g * v).y, epsilon = 1e-5);
        assert_relative_eq!(rotated.z, (g * v).z, epsilon = 1e-5);
    }
}

use crate::matrix::Matrix3f;
use crate::quat::Quat4f;
use crate::scalar::{self, QUAT_EPSILON};
use crate::tuple::Vector3f;

/// A rotation of `angle` radians about the axis `(x, y, z)`.
///
/// The axis does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle4f {
    /// The x component of the axis.
    pub x: f32,
    /// The y component of the axis.
    pub y: f32,
    /// The z component of the axis.
    pub z: f32,
    /// The rotation angle in radians.
    pub angle: f32,
}

impl AxisAngle4f {
    /// The identity rotation, zero radians about +Y.
    pub const IDENTITY: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Create an axis-angle from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, angle: f32) -> Self {
        Self { x, y, z, angle }
    }

    /// Create an axis-angle from an axis and an angle.
    #[inline]
    pub fn from_axis(axis: impl Into<Vector3f>, angle: f32) -> Self {
        let axis = axis.into();
        Self::new(axis.x, axis.y, axis.z, angle)
    }

    /// The components as `[x, y, z, angle]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.angle]
    }

    /// The rotation axis.
    #[inline]
    pub fn axis(&self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }

    /// The unit axis and angle of a quaternion, which need not be unit length.
    ///
    /// The angle is in `[0, 2 PI]`. A rotation too small to have a well defined axis gives
    /// [`Self::IDENTITY`].
    pub fn from_quat(q: Quat4f) -> Self {
        let mag_sq = q.x * q.x + q.y * q.y + q.z * q.z;
        if mag_sq <= QUAT_EPSILON * QUAT_EPSILON {
            return Self::IDENTITY;
        }
        let mag = scalar::sqrt(mag_sq);
        let inv = 1.0 / mag;
        Self::new(
            q.x * inv,
            q.y * inv,
            q.z * inv,
            2.0 * scalar::atan2(mag, q.w),
        )
    }

    /// The rotation of a 3x3 rotation matrix, the inverse of [`Matrix3f::from_axis_angle`].
    ///
    /// [`Quat4f::from_matrix3`] reads the transposed Watt & Watt layout, so the matrix is
    /// transposed before the conversion.
    #[inline]
    pub fn from_matrix3(m: &Matrix3f) -> Self {
        Self::from_quat(Quat4f::from_matrix3(&m.transpose()))
    }
}

impl Default for AxisAngle4f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat4f> for AxisAngle4f {
    #[inline]
    fn from(q: Quat4f) -> Self {
        Self::from_quat(q)
    }
}

impl std::fmt::Display for AxisAngle4f {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.angle)
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for AxisAngle4f {
    type Epsilon = <f32 as approx::AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| <f32 as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for AxisAngle4f {
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| <f32 as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative))
    }
}

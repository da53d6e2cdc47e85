use crate::matrix::Matrix3f;
use crate::scalar;
use crate::tuple::{Tuple2f, Vector3f};

define_tuple_type!(
    /// Spherical angles in a y-up frame: `x` is the heading about +Y, `y` the incline above the
    /// XZ plane, both in radians.
    Spherical2f, glam::Vec2, [f32; 2], new, [x, y]
);

impl_zero_default!(Spherical2f);
impl_tuple2_ops!(Spherical2f);

impl Spherical2f {
    /// The vector of length `length` pointing along the angles.
    pub fn to_yup_vector(self, length: f32) -> Vector3f {
        let (sx, cx) = (scalar::sin(self.x), scalar::cos(self.x));
        let (sy, cy) = (scalar::sin(self.y), scalar::cos(self.y));
        Vector3f::new(length * cy * cx, length * sy, length * -sx * cy)
    }

    /// The angles of the direction from the origin to `t`.
    ///
    /// The zero vector has heading and incline zero.
    pub fn from_yup(t: impl Into<Vector3f>) -> Self {
        let t = t.into();
        let length = t.length();
        let incline = if length > 0.0 {
            scalar::asin((t.y / length).clamp(-1.0, 1.0))
        } else {
            0.0
        };
        Self::new(scalar::atan2(-t.z, t.x), incline)
    }

    /// The rotation `rot_y(heading) * rot_z(incline)`, which maps +X onto
    /// [`Self::to_yup_vector`].
    pub fn to_yup_matrix(self) -> Matrix3f {
        Matrix3f::from_rotation_y(self.x) * Matrix3f::from_rotation_z(self.y)
    }

    /// The angles as a generic tuple.
    #[inline]
    pub fn to_tuple(self) -> Tuple2f {
        Tuple2f::from(self)
    }
}

use crate::color::Color4f;
use crate::quat::Quat4f;

define_tuple_type!(
    /// A generic four component tuple.
    Tuple4f, glam::Vec4, [f32; 4], new, [x, y, z, w]
);
define_tuple_type!(
    /// A four component vector, homogeneous when `w == 0`.
    Vector4f, glam::Vec4, [f32; 4], new, [x, y, z, w]
);

impl_zero_default!(Tuple4f, Vector4f);
impl_component_mul!(Tuple4f => glam::Vec4, Vector4f => glam::Vec4);
impl_tuple4_ops!(Tuple4f, Vector4f);
impl_tuple_conversions!([x, y, z, w]; Tuple4f, Vector4f, Color4f, Quat4f);

impl Vector4f {
    /// A direction from a three component tuple, with `w = 0`.
    #[inline]
    pub fn from_tuple3(t: impl Into<[f32; 3]>) -> Self {
        Self::from_xyz(t, 0.0)
    }
}

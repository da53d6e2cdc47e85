use crate::color::Color3f;

define_tuple_type!(
    /// A generic three component tuple.
    Tuple3f, glam::Vec3, [f32; 3], new, [x, y, z]
);
define_tuple_type!(
    /// A position in 3D space.
    Point3f, glam::Vec3, [f32; 3], new, [x, y, z]
);
define_tuple_type!(
    /// A direction or displacement in 3D space.
    Vector3f, glam::Vec3, [f32; 3], new, [x, y, z]
);

impl_zero_default!(Tuple3f, Point3f, Vector3f);
impl_component_mul!(Tuple3f => glam::Vec3, Point3f => glam::Vec3, Vector3f => glam::Vec3);
impl_tuple3_ops!(Tuple3f, Point3f, Vector3f);
impl_point_distances!(Point3f);
impl_tuple_conversions!([x, y, z]; Tuple3f, Point3f, Vector3f, Color3f);

macro_rules! impl_cross {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Right-handed cross product.
                #[inline]
                pub fn cross(self, rhs: Self) -> Self {
                    let a: glam::Vec3 = self.into();
                    let b: glam::Vec3 = rhs.into();
                    Self::from(a.cross(b))
                }
            }
        )+
    };
}

impl_cross!(Tuple3f, Vector3f);

impl Vector3f {
    /// Unit vector along +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_is_perpendicular() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert_relative_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_relative_eq!(c.dot(b), 0.0, epsilon = 1e-5);
        assert_eq!(Vector3f::X.cross(Vector3f::Y), Vector3f::Z);
        assert_eq!(a.cross(a), Vector3f::ZERO);
    }

    #[test]
    fn test_normalize() {
        let v = Vector3f::new(3.0, 0.0, 4.0).normalize();
        assert_relative_eq!(v, Vector3f::new(0.6, 0.0, 0.8));
        assert_relative_eq!(v.length(), 1.0);
        assert_eq!(Vector3f::ZERO.normalize(), Vector3f::ZERO);

        let mut t = Tuple3f::new(0.0, 2.0, 0.0);
        t.normalize_in_place();
        assert_eq!(t, Tuple3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_clamps() {
        let t = Tuple3f::new(-2.0, 0.5, 3.0);
        assert_eq!(t.clamp(-1.0, 1.0), Tuple3f::new(-1.0, 0.5, 1.0));
        assert_eq!(t.clamp_min(0.0), Tuple3f::new(0.0, 0.5, 3.0));
        assert_eq!(t.clamp_max(0.0), Tuple3f::new(-2.0, 0.0, 0.0));
        let lo = Tuple3f::new(-1.0, 1.0, 0.0);
        let hi = Tuple3f::new(0.0, 2.0, 2.0);
        assert_eq!(t.clamp_tuple(lo, hi), Tuple3f::new(-1.0, 1.0, 2.0));
    }

    #[test]
    fn test_interpolate_and_arithmetic() {
        let a = Point3f::new(0.0, 0.0, 0.0);
        let b = Point3f::new(2.0, 4.0, -2.0);
        assert_eq!(a.interpolate(b, 0.5), Point3f::new(1.0, 2.0, -1.0));
        assert_eq!(a.mix(b, 2.0), Point3f::new(4.0, 8.0, -4.0));
        assert_eq!(b.scale_add(0.5, b), Point3f::new(3.0, 6.0, -3.0));
        assert_eq!(b * Point3f::new(0.5, 0.25, 1.0), Point3f::new(1.0, 1.0, -2.0));
        assert_eq!(2.0 * b / 4.0, Point3f::new(1.0, 2.0, -1.0));
        let mut c = b;
        c -= b;
        assert_eq!(c, Point3f::ZERO);
    }

    #[test]
    fn test_max_element_and_axis() {
        let t = Tuple3f::new(1.0, 3.0, 2.0);
        assert_eq!(t.max_element(), 3.0);
        assert_eq!(t.max_axis(), 1);
        assert_eq!(Tuple3f::new(1.0, 1.0, 5.0).max_axis(), 2);
        assert_eq!(Tuple3f::splat(1.0).max_axis(), 0);
    }

    #[test]
    fn test_epsilon_equals_and_denormals() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        assert!(a.epsilon_equals(&Vector3f::new(1.05, 2.0, 2.96), 0.1));
        assert!(!a.epsilon_equals(&Vector3f::new(1.2, 2.0, 3.0), 0.1));
        assert!(!a.epsilon_equals(&Vector3f::new(f32::NAN, 2.0, 3.0), 10.0));

        let mut d = Vector3f::new(1e-9, -1e-9, 1.0);
        assert!(d.zero_denormals(1e-6));
        assert_eq!(d, Vector3f::new(0.0, 0.0, 1.0));
        assert!(!d.zero_denormals(1e-6));
    }

    #[test]
    fn test_point_distances() {
        let a = Point3f::new(1.0, 1.0, 1.0);
        let b = Point3f::new(2.0, -1.0, 4.0);
        assert_relative_eq!(a.distance_l1(b), 6.0);
        assert_relative_eq!(a.distance_linf(b), 3.0);
        assert_relative_eq!(a.distance_squared(b), 14.0);
    }

    #[test]
    fn test_conversions() {
        let v = Vector3f::new(0.1, 0.2, 0.3);
        let c: Color3f = v.into();
        let p = Point3f::from(c);
        assert_eq!(p.to_array(), [0.1, 0.2, 0.3]);
        assert_eq!(glam::Vec3::from(Tuple3f::from(p)), glam::Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(Vector3f::from([1.0, 2.0, 3.0]).to_string(), "(1, 2, 3)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let s = serde_json::to_string(&p)?;
        assert_eq!(s, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
        assert_eq!(serde_json::from_str::<Point3f>(&s)?, p);
        Ok(())
    }
}

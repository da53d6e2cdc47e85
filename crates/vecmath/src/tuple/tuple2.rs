use crate::spherical::Spherical2f;

define_tuple_type!(
    /// A generic two component tuple.
    Tuple2f, glam::Vec2, [f32; 2], new, [x, y]
);
define_tuple_type!(
    /// A position in 2D space.
    Point2f, glam::Vec2, [f32; 2], new, [x, y]
);
define_tuple_type!(
    /// A direction or displacement in 2D space.
    Vector2f, glam::Vec2, [f32; 2], new, [x, y]
);

impl_zero_default!(Tuple2f, Point2f, Vector2f);
impl_component_mul!(Tuple2f => glam::Vec2, Point2f => glam::Vec2, Vector2f => glam::Vec2);
impl_tuple2_ops!(Tuple2f, Point2f, Vector2f);
impl_point_distances!(Point2f);
impl_tuple_conversions!([x, y]; Tuple2f, Point2f, Vector2f, Spherical2f);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VecmathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_is_determinant() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2f::new(3.0, 4.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(b.cross(a), 2.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn test_perpendiculars() {
        let v = Vector2f::new(1.0, 0.0);
        assert_eq!(v.left_perpendicular(2.0), Vector2f::new(0.0, -2.0));
        assert_eq!(v.right_perpendicular(2.0), Vector2f::new(0.0, 2.0));
        assert_eq!(v.left_perpendicular(1.0).dot(v), 0.0);
    }

    #[test]
    fn test_inverse() {
        let v = Tuple2f::new(3.0, 4.0);
        assert_relative_eq!(v.inverse(), Tuple2f::new(0.12, 0.16));
        let q = Tuple2f::new(1.0, 1.0).mul_inverse(Tuple2f::new(2.0, 0.0));
        assert_relative_eq!(q, Tuple2f::new(0.5, 0.0));
    }

    #[test]
    fn test_point_distances() {
        let a = Point2f::new(1.0, 2.0);
        let b = Point2f::new(4.0, -2.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(a.distance_squared(b), 25.0);
        assert_relative_eq!(a.distance_l1(b), 7.0);
        assert_relative_eq!(a.distance_linf(b), 4.0);
    }

    #[test]
    fn test_elements() -> Result<(), VecmathError> {
        let mut t = Tuple2f::new(1.0, 2.0);
        assert_eq!(t.element(1)?, 2.0);
        t.set_element(0, 5.0)?;
        assert_eq!(t, Tuple2f::new(5.0, 2.0));
        assert_eq!(t.element(2), Err(VecmathError::IndexOutOfRange(2, 2)));
        assert_eq!(
            t.set_element(7, 0.0).map(|t| *t),
            Err(VecmathError::IndexOutOfRange(7, 2))
        );
        Ok(())
    }

    #[test]
    fn test_angle_and_display() {
        let a = Vector2f::new(1.0, 0.0);
        let b = Vector2f::new(0.0, 3.0);
        assert_relative_eq!(a.angle(b), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(a.angle(a * 2.0), 0.0);
        assert_eq!(Vector2f::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn test_conversions() {
        let p = Point2f::new(1.0, 2.0);
        let v: Vector2f = p.into();
        let t = Tuple2f::from(v);
        assert_eq!(t.to_array(), [1.0, 2.0]);
        let g: glam::Vec2 = t.into();
        assert_eq!(g, glam::Vec2::new(1.0, 2.0));
        assert_eq!(Tuple2f::from_slice(&[3.0, 4.0, 5.0]), Ok(Tuple2f::new(3.0, 4.0)));
        assert_eq!(
            Tuple2f::from_slice(&[3.0]),
            Err(VecmathError::InvalidSliceLength(1, 2))
        );
    }
}

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecmath::{
    AxisAngle4f, Color4f, Matrix3f, Matrix4f, Quat4f, Vector3f, Vector4f, VecmathError,
};

const SAMPLES: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn random_vector3(rng: &mut impl Rng) -> Vector3f {
    Vector3f::new(
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
    )
}

fn random_axis_angle(rng: &mut impl Rng) -> AxisAngle4f {
    loop {
        let axis = random_vector3(rng);
        if axis.length() > 0.1 {
            return AxisAngle4f::from_axis(axis, rng.random_range(-3.1..3.1));
        }
    }
}

#[test]
fn normalize_gives_unit_length() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let v = random_vector3(&mut rng);
        if v.length() > 1e-3 {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        }
        let w = Vector4f::from_tuple3(v);
        if w.length() > 1e-3 {
            assert_relative_eq!(w.normalize().length(), 1.0, epsilon = 1e-6);
        }
    }
    assert_eq!(Vector3f::ZERO.normalize(), Vector3f::ZERO);
    assert_eq!(Quat4f::ZERO.normalize(), Quat4f::ZERO);
}

#[test]
fn inverse_round_trips() -> Result<(), VecmathError> {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let m3 = Matrix3f::from_row_major(std::array::from_fn(|_| rng.random_range(-2.0..2.0)));
        if m3.determinant().abs() > 0.5 {
            assert_relative_eq!(m3 * m3.inverse()?, Matrix3f::IDENTITY, epsilon = 1e-4);
        }

        let m4 = Matrix4f::from_row_major(std::array::from_fn(|_| rng.random_range(-2.0..2.0)));
        if m4.determinant().abs() > 0.5 {
            assert_relative_eq!(m4 * m4.inverse()?, Matrix4f::IDENTITY, epsilon = 1e-3);
        }
    }
    Ok(())
}

#[test]
fn rotations_have_unit_scale() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let r = Matrix3f::from_axis_angle(random_axis_angle(&mut rng));
        let (scale, rotate) = r.get_scale_rotate();
        assert_relative_eq!(scale, Vector3f::splat(1.0), epsilon = 1e-5);
        assert_relative_eq!(rotate, r, epsilon = 1e-5);
    }
}

#[test]
fn slerp_endpoints_and_fixed_points() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q1 = Quat4f::from_axis_angle(random_axis_angle(&mut rng));
        let q2 = Quat4f::from_axis_angle(random_axis_angle(&mut rng));
        let alpha = rng.random_range(0.0..1.0);
        assert_relative_eq!(q1.slerp(q1, alpha), q1, epsilon = 1e-5);
        // the opposite quaternion takes the perpendicular path
        for target in [q2, -q1] {
            assert_relative_eq!(q1.slerp(target, 0.0), q1, epsilon = 1e-5);
            assert_relative_eq!(q1.slerp(target, 1.0), target, epsilon = 1e-5);
            assert_relative_eq!(q1.slerp(target, alpha).length(), 1.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn axis_angle_matrix_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let aa = random_axis_angle(&mut rng);
        let m = Matrix3f::from_axis_angle(aa);
        let back = Matrix3f::from_axis_angle(AxisAngle4f::from_matrix3(&m));
        assert_relative_eq!(back, m, epsilon = 1e-4);
    }
}

#[test]
fn quaternion_matrix_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q = Quat4f::from_axis_angle(random_axis_angle(&mut rng));
        let back = Quat4f::from_matrix3(&Matrix3f::from_quat(q));
        assert!(
            q.epsilon_equals(&back, 1e-4) || q.epsilon_equals(&-back, 1e-4),
            "{q} != {back}"
        );
    }
}

#[test]
fn normalize_cp_is_idempotent() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let m = Matrix3f::from_axis_angle(random_axis_angle(&mut rng))
            .scale_columns([rng.random_range(0.5..3.0), rng.random_range(0.5..3.0), 1.0]);
        let once = m.normalize_cp();
        assert_relative_eq!(once.normalize_cp(), once, epsilon = 1e-6);
    }
}

#[test]
fn scenarios() {
    assert_eq!(
        Vector3f::new(1.0, 0.0, 0.0).cross(Vector3f::new(0.0, 1.0, 0.0)),
        Vector3f::new(0.0, 0.0, 1.0)
    );
    assert_eq!(Matrix3f::IDENTITY.determinant(), 1.0);
    assert_eq!(Color4f::from_argb(0xFFFF0000), Color4f::new(1.0, 0.0, 0.0, 1.0));
    assert_relative_eq!(
        Matrix4f::from_quat(Quat4f::IDENTITY).to_quat(),
        Quat4f::from_xyzw(0.0, 0.0, 0.0, 1.0),
        epsilon = 1e-6
    );
}

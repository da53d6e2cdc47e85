use crate::axis_angle::AxisAngle4f;
use crate::matrix::Matrix3f;
use crate::quat::Quat4f;
use crate::scalar::GOOD_MATRIX4_EPSILON;
use crate::tuple::{Point3f, Vector3f};

define_matrix_type!(
    /// A 4x4 matrix, usually an affine transform with the translation in the last column.
    Matrix4f,
    glam::Mat4,
    4,
    [
        [m00, m01, m02, m03],
        [m10, m11, m12, m13],
        [m20, m21, m22, m23],
        [m30, m31, m32, m33]
    ]
);
impl_matrix_inverse!(Matrix4f);

impl Matrix4f {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    );

    /// A uniform scale of the upper 3x3 block; `m33` stays 1.
    pub fn from_scale(scale: f32) -> Self {
        Self::from_diagonal([scale, scale, scale, 1.0])
    }

    /// `m * s` in the upper 3x3 block and translation `t`.
    pub fn from_rotation_scale_translation(m: &Matrix3f, t: Vector3f, s: f32) -> Self {
        let mut out = Self::IDENTITY;
        out.set_rotation_scale(&(*m * s));
        out.set_translation(t);
        out
    }

    /// The rotation of `q` scaled by `s`, with translation `t`.
    pub fn from_quat_translation_scale(q: Quat4f, t: Vector3f, s: f32) -> Self {
        Self::from_rotation_scale_translation(&Matrix3f::from_quat(q), t, s)
    }

    /// A pure translation.
    pub fn from_translation(t: Vector3f) -> Self {
        let mut out = Self::IDENTITY;
        out.set_translation(t);
        out
    }

    /// Uniform scale `s` followed by translation `t`; the translation is not scaled.
    pub fn from_scale_translation(s: f32, t: Vector3f) -> Self {
        let mut out = Self::from_scale(s);
        out.set_translation(t);
        out
    }

    /// Uniform scale `s` with translation `s * t`.
    pub fn from_translation_scale(t: Vector3f, s: f32) -> Self {
        Self::from_scale_translation(s, t * s)
    }

    /// `m` as the upper 3x3 block, no translation.
    pub fn from_matrix3(m: &Matrix3f) -> Self {
        let mut out = Self::IDENTITY;
        out.set_rotation_scale(m);
        out
    }

    /// The rotation of a quaternion, see [`Matrix3f::from_quat`].
    pub fn from_quat(q: Quat4f) -> Self {
        Self::from_matrix3(&Matrix3f::from_quat(q))
    }

    /// The rotation of an axis-angle, see [`Matrix3f::from_axis_angle`].
    pub fn from_axis_angle(a: AxisAngle4f) -> Self {
        Self::from_matrix3(&Matrix3f::from_axis_angle(a))
    }

    /// Counter-clockwise rotation about the x axis by `angle` radians.
    pub fn from_rotation_x(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3f::from_rotation_x(angle))
    }

    /// Counter-clockwise rotation about the y axis by `angle` radians.
    pub fn from_rotation_y(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3f::from_rotation_y(angle))
    }

    /// Counter-clockwise rotation about the z axis by `angle` radians.
    pub fn from_rotation_z(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3f::from_rotation_z(angle))
    }

    /// A right-handed viewing transform looking from `eye` towards `center`.
    ///
    /// The rows of the rotation are the side, up and backward axes of the camera. If `up` is
    /// parallel to the view direction the side row is zero.
    pub fn look_at(eye: Point3f, center: Point3f, up: Vector3f) -> Self {
        let f = Vector3f::from(center - eye).normalize();
        let side = f.cross(up.normalize()).normalize();
        let u = side.cross(f);

        let rotation = Self::new(
            side.x, side.y, side.z, 0.0, u.x, u.y, u.z, 0.0, -f.x, -f.y, -f.z, 0.0, 0.0, 0.0,
            0.0, 1.0,
        );
        rotation * Self::from_translation(-Vector3f::from(eye))
    }

    /// The translation column `(m03, m13, m23)`.
    #[inline]
    pub fn translation(&self) -> Vector3f {
        Vector3f::new(self.m03, self.m13, self.m23)
    }

    /// Replace the translation column.
    pub fn set_translation(&mut self, t: impl Into<Vector3f>) -> &mut Self {
        let t = t.into();
        self.m03 = t.x;
        self.m13 = t.y;
        self.m23 = t.z;
        self
    }

    /// The upper 3x3 block, rotation and scale together.
    #[inline]
    pub fn rotation_scale(&self) -> Matrix3f {
        Matrix3f::from_matrix4(self)
    }

    /// Replace the upper 3x3 block.
    pub fn set_rotation_scale(&mut self, m: &Matrix3f) -> &mut Self {
        self.m00 = m.m00;
        self.m01 = m.m01;
        self.m02 = m.m02;
        self.m10 = m.m10;
        self.m11 = m.m11;
        self.m12 = m.m12;
        self.m20 = m.m20;
        self.m21 = m.m21;
        self.m22 = m.m22;
        self
    }

    /// Replace the rotation, keeping the current scale.
    ///
    /// The upper 3x3 block becomes `rotation * diag(get_scale())`.
    pub fn set_rotation(&mut self, rotation: impl Into<Matrix3f>) -> &mut Self {
        let scaled = rotation.into().scale_columns(self.get_scale());
        self.set_rotation_scale(&scaled)
    }

    /// Replace the uniform scale of the upper 3x3 block, keeping its rotation.
    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        let rotation = self.rotation_scale().normalize() * scale;
        self.set_rotation_scale(&rotation)
    }

    /// Singular values of the upper 3x3 block and its orthogonal factor.
    #[inline]
    pub fn get_scale_rotate(&self) -> (Vector3f, Matrix3f) {
        self.rotation_scale().get_scale_rotate()
    }

    /// Singular values of the upper 3x3 block, descending.
    #[inline]
    pub fn get_scale(&self) -> Vector3f {
        self.rotation_scale().get_scale()
    }

    /// Largest singular value of the upper 3x3 block.
    #[inline]
    pub fn max_scale(&self) -> f32 {
        self.rotation_scale().max_scale()
    }

    /// The upper 3x3 block with the scale factored out.
    #[inline]
    pub fn rotation(&self) -> Matrix3f {
        self.rotation_scale().normalize()
    }

    /// Rotation, translation and largest scale.
    pub fn rotation_translation(&self) -> (Matrix3f, Vector3f, f32) {
        let (scale, rotation) = self.get_scale_rotate();
        (rotation, self.translation(), scale.max_element())
    }

    /// The rotation of the upper 3x3 block as a quaternion.
    #[inline]
    pub fn to_quat(&self) -> Quat4f {
        Quat4f::from_matrix3(&self.rotation())
    }

    /// The determinant, by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = self;
        let minor = |a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32, i: f32| {
            a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
        };
        m.m00 * minor(m.m11, m.m12, m.m13, m.m21, m.m22, m.m23, m.m31, m.m32, m.m33)
            - m.m01 * minor(m.m10, m.m12, m.m13, m.m20, m.m22, m.m23, m.m30, m.m32, m.m33)
            + m.m02 * minor(m.m10, m.m11, m.m13, m.m20, m.m21, m.m23, m.m30, m.m31, m.m33)
            - m.m03 * minor(m.m10, m.m11, m.m12, m.m20, m.m21, m.m22, m.m30, m.m31, m.m32)
    }

    fn adjugate_scaled(&self, inv_det: f32) -> Self {
        let m = self;
        // 2x2 minors of the top two and bottom two rows
        let a0 = m.m00 * m.m11 - m.m01 * m.m10;
        let a1 = m.m00 * m.m12 - m.m02 * m.m10;
        let a2 = m.m00 * m.m13 - m.m03 * m.m10;
        let a3 = m.m01 * m.m12 - m.m02 * m.m11;
        let a4 = m.m01 * m.m13 - m.m03 * m.m11;
        let a5 = m.m02 * m.m13 - m.m03 * m.m12;
        let b0 = m.m20 * m.m31 - m.m21 * m.m30;
        let b1 = m.m20 * m.m32 - m.m22 * m.m30;
        let b2 = m.m20 * m.m33 - m.m23 * m.m30;
        let b3 = m.m21 * m.m32 - m.m22 * m.m31;
        let b4 = m.m21 * m.m33 - m.m23 * m.m31;
        let b5 = m.m22 * m.m33 - m.m23 * m.m32;

        Self::new(
            (m.m11 * b5 - m.m12 * b4 + m.m13 * b3) * inv_det,
            (-m.m01 * b5 + m.m02 * b4 - m.m03 * b3) * inv_det,
            (m.m31 * a5 - m.m32 * a4 + m.m33 * a3) * inv_det,
            (-m.m21 * a5 + m.m22 * a4 - m.m23 * a3) * inv_det,
            (-m.m10 * b5 + m.m12 * b2 - m.m13 * b1) * inv_det,
            (m.m00 * b5 - m.m02 * b2 + m.m03 * b1) * inv_det,
            (-m.m30 * a5 + m.m32 * a2 - m.m33 * a1) * inv_det,
            (m.m20 * a5 - m.m22 * a2 + m.m23 * a1) * inv_det,
            (m.m10 * b4 - m.m11 * b2 + m.m13 * b0) * inv_det,
            (-m.m00 * b4 + m.m01 * b2 - m.m03 * b0) * inv_det,
            (m.m30 * a4 - m.m31 * a2 + m.m33 * a0) * inv_det,
            (-m.m20 * a4 + m.m21 * a2 - m.m23 * a0) * inv_det,
            (-m.m10 * b3 + m.m11 * b1 - m.m12 * b0) * inv_det,
            (m.m00 * b3 - m.m01 * b1 + m.m02 * b0) * inv_det,
            (-m.m30 * a3 + m.m31 * a1 - m.m32 * a0) * inv_det,
            (m.m20 * a3 - m.m21 * a1 + m.m22 * a0) * inv_det,
        )
    }

    /// `self * (p, 1)`, dropping the resulting `w`.
    pub fn transform_point(&self, p: Point3f) -> Point3f {
        let [x, y, z, _] = self.transform([p.x, p.y, p.z, 1.0]);
        Point3f::new(x, y, z)
    }

    /// `self * (v, 0)`; the translation does not apply.
    pub fn transform_vector(&self, v: Vector3f) -> Vector3f {
        let [x, y, z, _] = self.transform([v.x, v.y, v.z, 0.0]);
        Vector3f::new(x, y, z)
    }

    /// `true` if every element is finite and `|det| >= GOOD_MATRIX4_EPSILON`.
    pub fn is_good_matrix(&self) -> bool {
        self.is_finite() && self.determinant().abs() >= GOOD_MATRIX4_EPSILON
    }
}

impl From<Matrix3f> for Matrix4f {
    #[inline]
    fn from(m: Matrix3f) -> Self {
        Self::from_matrix3(&m)
    }
}

impl From<Quat4f> for Matrix4f {
    #[inline]
    fn from(q: Quat4f) -> Self {
        Self::from_quat(q)
    }
}

mod matrix2;
mod matrix3;
mod matrix4;

pub use matrix2::Matrix2f;
pub use matrix3::Matrix3f;
pub use matrix4::Matrix4f;

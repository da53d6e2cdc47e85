#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! This crate provides:
//! - tuple value types of two, three and four components (`Tuple3f`, `Vector3f`, `Point3f`,
//!   `Color4f`, ...) with component-wise arithmetic
//! - `Quat4f` quaternions with Hamilton product and spherical interpolation
//! - `Matrix2f`, `Matrix3f` and `Matrix4f` with cofactor inverses and SVD based scale/rotation
//!   decomposition
//! - a scalar math shim with a process-wide strict/fast switch
//! - array-offset pointer helpers
//!
//! All types are plain `Copy` values. Operations either return a new value or, for the `set_*`
//! family, mutate the receiver and return `&mut Self` for chaining. Sharing a mutable instance
//! between threads needs external synchronization.

#[macro_use]
mod macros;

/// Axis-angle rotations.
pub mod axis_angle;

/// Packed RGB(A) colors.
pub mod color;

/// Error types for the vecmath module.
pub mod error;

/// 2x2, 3x3 and 4x4 matrices.
pub mod matrix;

/// Array indirection helpers.
pub mod pointer;

/// Quaternions.
pub mod quat;

/// Scalar trigonometry shim and tolerances.
pub mod scalar;

/// Spherical coordinates.
pub mod spherical;

/// Tuple, vector and point types.
pub mod tuple;

pub use axis_angle::AxisAngle4f;
pub use color::{Color3f, Color4f};
pub use error::{Result, VecmathError};
pub use matrix::{Matrix2f, Matrix3f, Matrix4f};
pub use pointer::{FieldPointer, FloatPointer, FloatSmartPointer, IntCellPointer, IntSmartPointer};
pub use quat::Quat4f;
pub use spherical::Spherical2f;
pub use tuple::{
    Point2f, Point3f, Tuple2f, Tuple3f, Tuple4b, Tuple4f, TupleElements, Vector2f, Vector3f,
    Vector4f,
};

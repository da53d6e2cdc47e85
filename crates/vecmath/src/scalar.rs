//! Scalar math shim.
//!
//! Every trigonometric and root function used by the library goes through this module. A single
//! process-wide flag selects between the fast platform implementation (`std` float methods, the
//! default) and the strict implementation from [`libm`], which gives the same bits on every
//! target.
//!
//! ```
//! use vecmath::scalar;
//!
//! scalar::set_strict_math(true);
//! let s = scalar::sin(0.5_f32);
//! scalar::set_strict_math(false);
//! assert!((s - 0.5_f32.sin()).abs() < 1e-6);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use num_traits::Float;

static STRICT_MATH: AtomicBool = AtomicBool::new(false);

/// Threshold used by quaternion interpolation and axis-angle degeneracy checks.
pub const QUAT_EPSILON: f32 = 1e-5;

/// Axis length below which a matrix axis-angle rotation is the identity.
pub const AXIS_EPSILON: f32 = 1e-8;

/// Smallest absolute determinant accepted by `Matrix3f::is_good_matrix`.
pub const GOOD_MATRIX3_EPSILON: f32 = 1e-5;

/// Smallest absolute determinant accepted by `Matrix4f::is_good_matrix`.
pub const GOOD_MATRIX4_EPSILON: f32 = 1e-3;

/// Selects the strict (`libm`) implementation for all subsequent calls.
pub fn set_strict_math(strict: bool) {
    let previous = STRICT_MATH.swap(strict, Ordering::Relaxed);
    if previous != strict {
        log::debug!("strict math {}", if strict { "enabled" } else { "disabled" });
    }
}

/// Returns `true` if the strict implementation is selected.
#[inline]
pub fn is_strict_math() -> bool {
    STRICT_MATH.load(Ordering::Relaxed)
}

/// A floating point scalar with a reproducible implementation of every shimmed function.
pub trait Real: Float {
    /// Strict sine.
    fn strict_sin(self) -> Self;
    /// Strict cosine.
    fn strict_cos(self) -> Self;
    /// Strict tangent.
    fn strict_tan(self) -> Self;
    /// Strict arcsine.
    fn strict_asin(self) -> Self;
    /// Strict arccosine.
    fn strict_acos(self) -> Self;
    /// Strict arctangent.
    fn strict_atan(self) -> Self;
    /// Strict four quadrant arctangent of `self / x`.
    fn strict_atan2(self, x: Self) -> Self;
    /// Strict square root.
    fn strict_sqrt(self) -> Self;
    /// Strict power.
    fn strict_pow(self, e: Self) -> Self;
}

macro_rules! impl_real {
    (
        $t:ty,
        $sin:path,
        $cos:path,
        $tan:path,
        $asin:path,
        $acos:path,
        $atan:path,
        $atan2:path,
        $sqrt:path,
        $pow:path
    ) => {
        impl Real for $t {
            #[inline]
            fn strict_sin(self) -> Self {
                $sin(self)
            }

            #[inline]
            fn strict_cos(self) -> Self {
                $cos(self)
            }

            #[inline]
            fn strict_tan(self) -> Self {
                $tan(self)
            }

            #[inline]
            fn strict_asin(self) -> Self {
                $asin(self)
            }

            #[inline]
            fn strict_acos(self) -> Self {
                $acos(self)
            }

            #[inline]
            fn strict_atan(self) -> Self {
                $atan(self)
            }

            #[inline]
            fn strict_atan2(self, x: Self) -> Self {
                $atan2(self, x)
            }

            #[inline]
            fn strict_sqrt(self) -> Self {
                $sqrt(self)
            }

            #[inline]
            fn strict_pow(self, e: Self) -> Self {
                $pow(self, e)
            }
        }
    };
}

impl_real!(
    f32,
    libm::sinf,
    libm::cosf,
    libm::tanf,
    libm::asinf,
    libm::acosf,
    libm::atanf,
    libm::atan2f,
    libm::sqrtf,
    libm::powf
);
impl_real!(
    f64,
    libm::sin,
    libm::cos,
    libm::tan,
    libm::asin,
    libm::acos,
    libm::atan,
    libm::atan2,
    libm::sqrt,
    libm::pow
);

macro_rules! shim_unary {
    ($(#[$meta:meta])* $name:ident, $strict:ident) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<T: Real>(x: T) -> T {
            if is_strict_math() {
                x.$strict()
            } else {
                Float::$name(x)
            }
        }
    };
}

shim_unary!(
    /// Sine of `x` radians.
    sin, strict_sin
);
shim_unary!(
    /// Cosine of `x` radians.
    cos, strict_cos
);
shim_unary!(
    /// Tangent of `x` radians.
    tan, strict_tan
);
shim_unary!(
    /// Arcsine in radians; NaN outside `[-1, 1]`.
    asin, strict_asin
);
shim_unary!(
    /// Arccosine in radians; NaN outside `[-1, 1]`.
    acos, strict_acos
);
shim_unary!(
    /// Arctangent in radians.
    atan, strict_atan
);
shim_unary!(
    /// Square root; NaN for negative input.
    sqrt, strict_sqrt
);

/// Four quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: Real>(y: T, x: T) -> T {
    if is_strict_math() {
        y.strict_atan2(x)
    } else {
        y.atan2(x)
    }
}

/// `x` raised to the power `e`.
#[inline]
pub fn pow<T: Real>(x: T, e: T) -> T {
    if is_strict_math() {
        x.strict_pow(e)
    } else {
        x.powf(e)
    }
}

/// Returns `true` if `a` and `b` differ by more than `epsilon`.
///
/// A NaN difference is not considered different, so callers that build an equality test on top
/// of it must check for NaN themselves.
#[inline]
pub fn different_epsilon(a: f32, b: f32, epsilon: f32) -> bool {
    let diff = a - b;
    if diff.is_nan() {
        return false;
    }
    diff.abs() > epsilon
}

/// Returns `true` if `|a - b| <= epsilon`. NaN is never within epsilon.
#[inline]
pub fn epsilon_equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

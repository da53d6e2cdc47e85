//! Macro to define a float tuple type.
//!
//! # Arguments
//!
//! * `name` - The name of the tuple type.
//! * `glam_type` - The glam vector used for the arithmetic.
//! * `array` - The array type.
//! * `ctor` - The name of the raw component constructor.
//! * `fields` - The fields of the tuple.
//!
macro_rules! define_tuple_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $array:ty, $ctor:ident, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(pub $field: f32),+
        }

        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self {
                $($field: 0.0),+
            };

            /// Number of components.
            pub const LEN: usize = [$(stringify!($field)),+].len();

            /// Create a tuple from its components.
            #[inline]
            pub const fn $ctor($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a tuple with every component set to `v`.
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }

            /// Create a tuple from an array.
            #[inline]
            pub fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the tuple to an array.
            #[inline]
            pub fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Create a tuple from the first `LEN` elements of a slice.
            pub fn from_slice(slice: &[f32]) -> $crate::error::Result<Self> {
                $crate::error::check_len(slice.len(), Self::LEN)?;
                let mut arr: $array = Self::ZERO.to_array();
                arr.copy_from_slice(&slice[..Self::LEN]);
                Ok(Self::from_array(arr))
            }

            /// Component at `index`, in field order.
            #[inline]
            pub fn element(&self, index: usize) -> $crate::error::Result<f32> {
                self.to_array()
                    .get(index)
                    .copied()
                    .ok_or($crate::error::VecmathError::IndexOutOfRange(index, Self::LEN))
            }

            /// Set the component at `index`, in field order.
            pub fn set_element(
                &mut self,
                index: usize,
                value: f32,
            ) -> $crate::error::Result<&mut Self> {
                $crate::error::check_index(index, Self::LEN)?;
                let mut arr = self.to_array();
                arr[index] = value;
                *self = Self::from_array(arr);
                Ok(self)
            }

            /// Dot product between two tuples.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                a.dot(b)
            }

            /// Squared euclidean length.
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean length (magnitude) of the tuple.
            #[inline]
            pub fn length(self) -> f32 {
                $crate::scalar::sqrt(self.length_squared())
            }

            /// Scale the tuple to unit length.
            ///
            /// A zero-length tuple is returned unchanged.
            #[inline]
            pub fn normalize(self) -> Self {
                let norm = 1.0 / self.length();
                if norm.is_infinite() {
                    return self;
                }
                self * norm
            }

            /// In-place form of [`Self::normalize`].
            #[inline]
            pub fn normalize_in_place(&mut self) -> &mut Self {
                *self = self.normalize();
                self
            }

            /// Squared euclidean distance between two tuples.
            #[inline]
            pub fn distance_squared(self, rhs: Self) -> f32 {
                (self - rhs).length_squared()
            }

            /// Euclidean distance between two tuples.
            #[inline]
            pub fn distance(self, rhs: Self) -> f32 {
                $crate::scalar::sqrt(self.distance_squared(rhs))
            }

            /// Angle in radians between two tuples, in `[0, PI]`.
            pub fn angle(self, rhs: Self) -> f32 {
                let mut cos = self.dot(rhs) / (self.length() * rhs.length());
                if cos < -1.0 {
                    cos = -1.0;
                }
                if cos > 1.0 {
                    cos = 1.0;
                }
                $crate::scalar::acos(cos)
            }

            /// Multiply every component by `s`.
            #[inline]
            pub fn scale(self, s: f32) -> Self {
                self * s
            }

            /// `s * self + t`.
            #[inline]
            pub fn scale_add(self, s: f32, t: Self) -> Self {
                self * s + t
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                let a: $glam_type = self.into();
                Self::from(a.abs())
            }

            /// Saturate every component to `[min, max]`.
            #[inline]
            pub fn clamp(self, min: f32, max: f32) -> Self {
                Self {
                    $($field: if self.$field > max {
                        max
                    } else if self.$field < min {
                        min
                    } else {
                        self.$field
                    }),+
                }
            }

            /// Raise every component below `min` to `min`.
            #[inline]
            pub fn clamp_min(self, min: f32) -> Self {
                Self {
                    $($field: if self.$field < min { min } else { self.$field }),+
                }
            }

            /// Lower every component above `max` to `max`.
            #[inline]
            pub fn clamp_max(self, max: f32) -> Self {
                Self {
                    $($field: if self.$field > max { max } else { self.$field }),+
                }
            }

            /// Saturate every component to the matching components of `min` and `max`.
            #[inline]
            pub fn clamp_tuple(self, min: Self, max: Self) -> Self {
                Self {
                    $($field: if self.$field > max.$field {
                        max.$field
                    } else if self.$field < min.$field {
                        min.$field
                    } else {
                        self.$field
                    }),+
                }
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: self.$field.min(rhs.$field)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: self.$field.max(rhs.$field)),+ }
            }

            /// Linear interpolation `(1 - alpha) * self + alpha * rhs`.
            ///
            /// `alpha` is not restricted to `[0, 1]`.
            #[inline]
            pub fn interpolate(self, rhs: Self, alpha: f32) -> Self {
                Self { $($field: (1.0 - alpha) * self.$field + alpha * rhs.$field),+ }
            }

            /// Alias of [`Self::interpolate`].
            #[inline]
            pub fn mix(self, rhs: Self, alpha: f32) -> Self {
                self.interpolate(rhs, alpha)
            }

            /// L-infinity comparison. Any NaN difference compares unequal.
            pub fn epsilon_equals(&self, other: &Self, epsilon: f32) -> bool {
                [$(self.$field - other.$field),+]
                    .iter()
                    .all(|d| !d.is_nan() && d.abs() <= epsilon)
            }

            /// Flush components with `0 < |v| < epsilon` to zero.
            ///
            /// Returns `true` if any was flushed.
            pub fn zero_denormals(&mut self, epsilon: f32) -> bool {
                let mut zeroed = false;
                $(
                    let e = self.$field.abs();
                    if e > 0.0 && e < epsilon {
                        self.$field = 0.0;
                        zeroed = true;
                    }
                )+
                if zeroed {
                    log::trace!("flushed denormal components of {}", stringify!($name));
                }
                zeroed
            }

            /// Check if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                $(self.$field.is_finite())&&+
            }
        }

        impl $crate::tuple::TupleElements for $name {
            const LEN: usize = $name::LEN;

            #[inline]
            fn element(&self, index: usize) -> $crate::error::Result<f32> {
                $name::element(self, index)
            }

            #[inline]
            fn set_element(&mut self, index: usize, value: f32) -> $crate::error::Result<()> {
                $name::set_element(self, index, value).map(|_| ())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for (i, v) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = <f32 as approx::AbsDiffEq>::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let a: $array = (*self).to_array();
                let b: $array = (*other).to_array();
                a.iter()
                    .zip(b.iter())
                    .all(|(ai, bi)| <f32 as approx::AbsDiffEq>::abs_diff_eq(ai, bi, epsilon))
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let a: $array = (*self).to_array();
                let b: $array = (*other).to_array();
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <f32 as approx::RelativeEq>::relative_eq(ai, bi, epsilon, max_relative)
                })
            }
        }

        // Arithmetic operations implemented via glam.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a + b)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a - b)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a * rhs)
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                let b: $glam_type = rhs.into();
                $name::from(self * b)
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a / rhs)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(-a)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

/// Component-wise product and quotient between tuples of the same type.
macro_rules! impl_component_mul {
    ($($name:ident => $glam_type:ty),+ $(,)?) => {
        $(
            impl std::ops::Mul for $name {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: Self) -> Self::Output {
                    let a: $glam_type = self.into();
                    let b: $glam_type = rhs.into();
                    Self::from(a * b)
                }
            }

            impl std::ops::Div for $name {
                type Output = Self;

                #[inline]
                fn div(self, rhs: Self) -> Self::Output {
                    let a: $glam_type = self.into();
                    let b: $glam_type = rhs.into();
                    Self::from(a / b)
                }
            }

            impl std::ops::MulAssign for $name {
                #[inline]
                fn mul_assign(&mut self, rhs: Self) {
                    *self = *self * rhs;
                }
            }

            impl std::ops::DivAssign for $name {
                #[inline]
                fn div_assign(&mut self, rhs: Self) {
                    *self = *self / rhs;
                }
            }
        )+
    };
}

/// `Default` as the all-zero tuple.
macro_rules! impl_zero_default {
    ($($name:ident),+ $(,)?) => {
        $(
            impl Default for $name {
                #[inline]
                fn default() -> Self {
                    Self::ZERO
                }
            }
        )+
    };
}

/// Lossless `From` conversions between every pair of tuple types sharing the given fields.
macro_rules! impl_tuple_conversions {
    (@pair [$($field:ident),+]; $a:ident, $b:ident) => {
        impl From<$a> for $b {
            #[inline]
            fn from(v: $a) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl From<$b> for $a {
            #[inline]
            fn from(v: $b) -> Self {
                Self { $($field: v.$field),+ }
            }
        }
    };
    ($fields:tt;) => {};
    ($fields:tt; $head:ident $(, $tail:ident)*) => {
        $(impl_tuple_conversions!(@pair $fields; $head, $tail);)*
        impl_tuple_conversions!($fields; $($tail),*);
    };
}

/// Operations shared by every two component tuple.
macro_rules! impl_tuple2_ops {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// The 2D cross product `self.x * rhs.y - self.y * rhs.x`.
                #[inline]
                pub fn cross(self, rhs: Self) -> f32 {
                    self.x * rhs.y - self.y * rhs.x
                }

                /// `(s * y, -s * x)`, the clockwise perpendicular scaled by `s`.
                #[inline]
                pub fn left_perpendicular(self, s: f32) -> Self {
                    Self { x: s * self.y, y: s * -self.x }
                }

                /// `(-s * y, s * x)`, the counter-clockwise perpendicular scaled by `s`.
                #[inline]
                pub fn right_perpendicular(self, s: f32) -> Self {
                    Self { x: s * -self.y, y: s * self.x }
                }

                /// `self / |self|^2`. Non-finite for the zero tuple.
                #[inline]
                pub fn inverse(self) -> Self {
                    self * (1.0 / self.length_squared())
                }

                /// Component-wise product of `self` and `rhs.inverse()`.
                #[inline]
                pub fn mul_inverse(self, rhs: Self) -> Self {
                    let inv = rhs.inverse();
                    Self { x: self.x * inv.x, y: self.y * inv.y }
                }
            }
        )+
    };
}

/// Operations shared by every three component tuple.
macro_rules! impl_tuple3_ops {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Largest component.
                #[inline]
                pub fn max_element(self) -> f32 {
                    self.x.max(self.y).max(self.z)
                }

                /// Index of the largest component, preferring the lower index on ties.
                #[inline]
                pub fn max_axis(self) -> usize {
                    if self.x >= self.y.max(self.z) {
                        0
                    } else if self.y >= self.x.max(self.z) {
                        1
                    } else {
                        2
                    }
                }
            }
        )+
    };
}

/// Operations shared by the four component tuples that are not quaternions.
macro_rules! impl_tuple4_ops {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Create a tuple from a three component tuple and a `w` value.
                #[inline]
                pub fn from_xyz(xyz: impl Into<[f32; 3]>, w: f32) -> Self {
                    let [x, y, z] = xyz.into();
                    Self { x, y, z, w }
                }

                /// The first three components.
                #[inline]
                pub fn xyz(self) -> $crate::tuple::Tuple3f {
                    $crate::tuple::Tuple3f::new(self.x, self.y, self.z)
                }

                /// Largest of `x`, `y` and `z`.
                #[inline]
                pub fn max3(self) -> f32 {
                    self.x.max(self.y).max(self.z)
                }

                /// Largest component.
                #[inline]
                pub fn max_element(self) -> f32 {
                    self.max3().max(self.w)
                }

                /// Index of the largest of `x`, `y` and `z`.
                #[inline]
                pub fn max_axis3(self) -> usize {
                    if self.x >= self.y.max(self.z) {
                        0
                    } else if self.y >= self.x.max(self.z) {
                        1
                    } else {
                        2
                    }
                }

                /// Index of the largest component.
                #[inline]
                pub fn max_axis(self) -> usize {
                    let axis = self.max_axis3();
                    if self.w > self.max3() {
                        3
                    } else {
                        axis
                    }
                }

                /// `self / |self|^2`. Non-finite for the zero tuple.
                #[inline]
                pub fn inverse(self) -> Self {
                    self * (1.0 / self.length_squared())
                }

                /// Component-wise product of `self` and `rhs.inverse()`.
                #[inline]
                pub fn mul_inverse(self, rhs: Self) -> Self {
                    let inv = rhs.inverse();
                    Self {
                        x: self.x * inv.x,
                        y: self.y * inv.y,
                        z: self.z * inv.z,
                        w: self.w * inv.w,
                    }
                }
            }
        )+
    };
}

/// L1 and L-infinity distances for point types.
macro_rules! impl_point_distances {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Manhattan distance, the sum of absolute component differences.
                #[inline]
                pub fn distance_l1(self, rhs: Self) -> f32 {
                    (self - rhs).abs().to_array().iter().sum()
                }

                /// Chebyshev distance, the largest absolute component difference.
                #[inline]
                pub fn distance_linf(self, rhs: Self) -> f32 {
                    (self - rhs)
                        .abs()
                        .to_array()
                        .iter()
                        .fold(0.0_f32, |acc, v| acc.max(*v))
                }
            }
        )+
    };
}

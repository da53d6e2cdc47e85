//! Macro to define a square float matrix type.
//!
//! # Arguments
//!
//! * `name` - The name of the matrix type.
//! * `glam_type` - The glam matrix used for the products.
//! * `n` - The number of rows and columns.
//! * `rows` - The field names, one bracketed list per row.
//!
//! Fields are stored row-major (`m01` is row 0, column 1). glam matrices are column-major, the
//! conversions transpose.
macro_rules! define_matrix_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $n:literal, [$([$($field:ident),+]),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $($(pub $field: f32),+),+
        }

        impl $name {
            /// All elements zero.
            pub const ZERO: Self = Self {
                $($($field: 0.0),+),+
            };

            /// Number of rows (and columns).
            pub const DIM: usize = $n;

            /// Create a matrix from its elements in row-major order.
            #[allow(clippy::too_many_arguments)]
            #[inline]
            pub const fn new($($($field: f32),+),+) -> Self {
                Self { $($($field),+),+ }
            }

            /// Create a matrix from an array of rows.
            #[inline]
            pub fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                let [$([$($field),+]),+] = rows;
                Self { $($($field),+),+ }
            }

            /// The rows of the matrix.
            #[inline]
            pub fn to_rows(&self) -> [[f32; $n]; $n] {
                [$([$(self.$field),+]),+]
            }

            /// Create a matrix from a flat row-major array.
            #[inline]
            pub fn from_row_major(arr: [f32; $n * $n]) -> Self {
                let [$($($field),+),+] = arr;
                Self { $($($field),+),+ }
            }

            /// The elements as a flat row-major array.
            #[inline]
            pub fn to_row_major(&self) -> [f32; $n * $n] {
                [$($(self.$field),+),+]
            }

            /// Create a matrix from the first `DIM * DIM` elements of a row-major slice.
            pub fn from_slice(slice: &[f32]) -> $crate::error::Result<Self> {
                $crate::error::check_len(slice.len(), $n * $n)?;
                let mut arr = [0.0; $n * $n];
                arr.copy_from_slice(&slice[..$n * $n]);
                Ok(Self::from_row_major(arr))
            }

            /// Element at `row`, `column`.
            pub fn element(&self, row: usize, column: usize) -> $crate::error::Result<f32> {
                $crate::error::check_index(row, $n)?;
                $crate::error::check_index(column, $n)?;
                Ok(self.to_rows()[row][column])
            }

            /// Set the element at `row`, `column`.
            pub fn set_element(
                &mut self,
                row: usize,
                column: usize,
                value: f32,
            ) -> $crate::error::Result<&mut Self> {
                $crate::error::check_index(row, $n)?;
                $crate::error::check_index(column, $n)?;
                let mut rows = self.to_rows();
                rows[row][column] = value;
                *self = Self::from_rows(rows);
                Ok(self)
            }

            /// Row `index`.
            pub fn row(&self, index: usize) -> $crate::error::Result<[f32; $n]> {
                $crate::error::check_index(index, $n)?;
                Ok(self.to_rows()[index])
            }

            /// Column `index`.
            pub fn column(&self, index: usize) -> $crate::error::Result<[f32; $n]> {
                $crate::error::check_index(index, $n)?;
                Ok(self.to_rows().map(|row| row[index]))
            }

            /// Replace row `index`.
            pub fn set_row(
                &mut self,
                index: usize,
                values: impl Into<[f32; $n]>,
            ) -> $crate::error::Result<&mut Self> {
                $crate::error::check_index(index, $n)?;
                let mut rows = self.to_rows();
                rows[index] = values.into();
                *self = Self::from_rows(rows);
                Ok(self)
            }

            /// Replace column `index`.
            pub fn set_column(
                &mut self,
                index: usize,
                values: impl Into<[f32; $n]>,
            ) -> $crate::error::Result<&mut Self> {
                $crate::error::check_index(index, $n)?;
                let values = values.into();
                let mut rows = self.to_rows();
                for (row, v) in rows.iter_mut().zip(values) {
                    row[index] = v;
                }
                *self = Self::from_rows(rows);
                Ok(self)
            }

            /// The main diagonal.
            pub fn diagonal(&self) -> [f32; $n] {
                let rows = self.to_rows();
                std::array::from_fn(|i| rows[i][i])
            }

            /// A matrix with `d` on the diagonal and zeros elsewhere.
            pub fn from_diagonal(d: impl Into<[f32; $n]>) -> Self {
                let mut m = Self::ZERO;
                m.set_diagonal(d);
                m
            }

            /// Overwrite the main diagonal, leaving the other elements untouched.
            pub fn set_diagonal(&mut self, d: impl Into<[f32; $n]>) -> &mut Self {
                let mut rows = self.to_rows();
                for (i, v) in d.into().into_iter().enumerate() {
                    rows[i][i] = v;
                }
                *self = Self::from_rows(rows);
                self
            }

            /// Reset to the identity.
            #[inline]
            pub fn set_identity(&mut self) -> &mut Self {
                *self = Self::IDENTITY;
                self
            }

            /// Reset to all zeros.
            #[inline]
            pub fn set_zero(&mut self) -> &mut Self {
                *self = Self::ZERO;
                self
            }

            /// Sum of the diagonal.
            #[inline]
            pub fn trace(&self) -> f32 {
                self.diagonal().iter().sum()
            }

            /// The transposed matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                let m: $glam_type = (*self).into();
                Self::from(m.transpose())
            }

            /// Add `s` to every element.
            #[inline]
            pub fn add_scalar(&self, s: f32) -> Self {
                Self { $($($field: self.$field + s),+),+ }
            }

            /// Element-wise absolute value.
            #[inline]
            pub fn abs(&self) -> Self {
                Self { $($($field: self.$field.abs()),+),+ }
            }

            /// `self^T * rhs^T`.
            #[inline]
            pub fn mul_transpose_both(&self, rhs: &Self) -> Self {
                self.transpose() * rhs.transpose()
            }

            /// `self * rhs^T`.
            #[inline]
            pub fn mul_transpose_right(&self, rhs: &Self) -> Self {
                *self * rhs.transpose()
            }

            /// `self^T * rhs`.
            #[inline]
            pub fn mul_transpose_left(&self, rhs: &Self) -> Self {
                self.transpose() * *rhs
            }

            /// Multiply column `c` by `s[c]`, i.e. `self * diag(s)`.
            pub fn scale_columns(&self, s: impl Into<[f32; $n]>) -> Self {
                let s = s.into();
                let rows: [[f32; $n]; $n] =
                    self.to_rows().map(|row| std::array::from_fn(|c| row[c] * s[c]));
                Self::from_rows(rows)
            }

            /// Multiply row `r` by `s[r]`, i.e. `diag(s) * self`.
            pub fn scale_rows(&self, s: impl Into<[f32; $n]>) -> Self {
                let s = s.into();
                let mut rows = self.to_rows();
                for (row, k) in rows.iter_mut().zip(s) {
                    *row = row.map(|v| v * k);
                }
                Self::from_rows(rows)
            }

            /// `self * t` for a column tuple `t`.
            pub fn transform<T>(&self, t: T) -> T
            where
                T: Into<[f32; $n]> + From<[f32; $n]>,
            {
                let v: [f32; $n] = t.into();
                let rows = self.to_rows();
                T::from(rows.map(|row| row.iter().zip(v.iter()).map(|(a, b)| a * b).sum::<f32>()))
            }

            /// L-infinity comparison. Any NaN difference compares unequal.
            pub fn epsilon_equals(&self, other: &Self, epsilon: f32) -> bool {
                [$($(self.$field - other.$field),+),+]
                    .iter()
                    .all(|d| !d.is_nan() && d.abs() <= epsilon)
            }

            /// Check if all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                $($(self.$field.is_finite())&&+)&&+
            }

            /// Flush elements with `0 < |v| < epsilon` to zero. Returns `true` if any was flushed.
            pub fn zero_denormals(&mut self, epsilon: f32) -> bool {
                let mut zeroed = false;
                $($(
                    let e = self.$field.abs();
                    if e > 0.0 && e < epsilon {
                        self.$field = 0.0;
                        zeroed = true;
                    }
                )+)+
                if zeroed {
                    log::trace!("flushed denormal elements of {}", stringify!($name));
                }
                zeroed
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                for row in self.to_rows() {
                    for (i, v) in row.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{v}")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self::from_rows(m.transpose().to_cols_array_2d())
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                <$glam_type>::from_cols_array_2d(&m.to_rows()).transpose()
            }
        }

        impl From<[[f32; $n]; $n]> for $name {
            #[inline]
            fn from(rows: [[f32; $n]; $n]) -> Self {
                Self::from_rows(rows)
            }
        }

        impl From<$name> for [[f32; $n]; $n] {
            #[inline]
            fn from(m: $name) -> Self {
                m.to_rows()
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
                let a = self.to_row_major();
                let b = other.to_row_major();
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
                let a = self.to_row_major();
                let b = other.to_row_major();
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

        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a * b)
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
                rhs * self
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

        impl std::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }
    };
}

/// Cofactor inverse plumbing shared by the matrix types.
///
/// The type must provide `determinant()` and `fn adjugate_scaled(&self, inv_det: f32) -> Self`.
macro_rules! impl_matrix_inverse {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// The inverse matrix.
                ///
                /// Fails with [`SingularMatrix`](crate::VecmathError::SingularMatrix) when the
                /// determinant is zero, not finite, or has no finite reciprocal.
                pub fn inverse(&self) -> $crate::error::Result<Self> {
                    let det = self.determinant();
                    let inv_det = 1.0 / det;
                    if det == 0.0 || !det.is_finite() || !inv_det.is_finite() {
                        log::debug!("{} is singular, determinant {det}", stringify!($name));
                        return Err($crate::error::VecmathError::SingularMatrix(det));
                    }
                    Ok(self.adjugate_scaled(inv_det))
                }

                /// Invert in place. On error `self` is left unchanged.
                pub fn invert(&mut self) -> $crate::error::Result<&mut Self> {
                    *self = self.inverse()?;
                    Ok(self)
                }
            }
        )+
    };
}

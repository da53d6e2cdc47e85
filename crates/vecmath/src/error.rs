use thiserror::Error;

/// An error type for vecmath operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VecmathError {
    /// Element, row or column index out of range.
    #[error("Index out of range. The index {0} is out of range (0..{1}).")]
    IndexOutOfRange(usize, usize),

    /// Inversion of a matrix whose determinant has no finite reciprocal.
    #[error("Singular matrix. The determinant {0} cannot be inverted.")]
    SingularMatrix(f32),

    /// A slice shorter than the value it is read into.
    #[error("Invalid slice length. Got {0} elements but {1} are required.")]
    InvalidSliceLength(usize, usize),

    /// A pointer offset moved outside its array.
    #[error("Offset out of range. The offset {0} is outside the array of length {1}.")]
    OffsetOutOfRange(isize, usize),
}

/// A specialized `Result` type for vecmath operations.
pub type Result<T> = std::result::Result<T, VecmathError>;

/// Checks `index < bound`.
#[inline]
pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(VecmathError::IndexOutOfRange(index, bound))
    }
}

/// Checks that a slice has at least `required` elements.
#[inline]
pub(crate) fn check_len(len: usize, required: usize) -> Result<()> {
    if len >= required {
        Ok(())
    } else {
        Err(VecmathError::InvalidSliceLength(len, required))
    }
}

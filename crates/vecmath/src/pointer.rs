//! Indirection helpers over float arrays and tuple components.
//!
//! [`FloatPointer`] is an offset into a shared array of [`Cell`]s, so any number of pointers can
//! read and write the same storage. The smart pointer traits abstract over "something holding one
//! number" and provide compound assignment on top of `get` and `set`.

use std::cell::Cell;

use crate::error::{check_index, check_len, Result, VecmathError};
use crate::tuple::TupleElements;

/// An offset into a float array.
#[derive(Debug, Clone, Copy)]
pub struct FloatPointer<'a> {
    cells: &'a [Cell<f32>],
    offset: usize,
}

impl<'a> FloatPointer<'a> {
    /// A pointer to the first element of `array`.
    ///
    /// Further pointers into the same array are derived with [`Self::offset_by`] or by copying.
    pub fn new(array: &'a mut [f32]) -> Self {
        Self::from_cells(Cell::from_mut(array).as_slice_of_cells())
    }

    /// A pointer to the first element of `cells`.
    #[inline]
    pub fn from_cells(cells: &'a [Cell<f32>]) -> Self {
        Self { cells, offset: 0 }
    }

    /// A pointer to element `offset` of `cells`.
    ///
    /// The offset may equal the array length, in which case only reads of length zero succeed.
    pub fn with_offset(cells: &'a [Cell<f32>], offset: usize) -> Result<Self> {
        if offset > cells.len() {
            return Err(VecmathError::OffsetOutOfRange(offset as isize, cells.len()));
        }
        Ok(Self { cells, offset })
    }

    /// The array this pointer addresses.
    #[inline]
    pub fn cells(&self) -> &'a [Cell<f32>] {
        self.cells
    }

    /// Position of the pointer in its array.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A pointer `delta` elements away in the same array.
    pub fn offset_by(&self, delta: isize) -> Result<Self> {
        let len = self.cells.len();
        let target = self.resolve(delta)?;
        if target > len {
            return Err(VecmathError::OffsetOutOfRange(target as isize, len));
        }
        Ok(Self {
            cells: self.cells,
            offset: target,
        })
    }

    // `offset + delta` as an index; negative or overflowing targets are rejected
    fn resolve(&self, delta: isize) -> Result<usize> {
        let base = self.offset as isize;
        match base.checked_add(delta) {
            Some(target) if target >= 0 => Ok(target as usize),
            _ => Err(VecmathError::OffsetOutOfRange(
                base.saturating_add(delta),
                self.cells.len(),
            )),
        }
    }

    fn cell(&self, delta: isize) -> Result<&'a Cell<f32>> {
        let index = self.resolve(delta)?;
        check_index(index, self.cells.len())?;
        Ok(&self.cells[index])
    }

    /// The element under the pointer.
    #[inline]
    pub fn get(&self) -> Result<f32> {
        self.get_at(0)
    }

    /// The element `delta` positions from the pointer.
    #[inline]
    pub fn get_at(&self, delta: isize) -> Result<f32> {
        Ok(self.cell(delta)?.get())
    }

    /// Overwrite the element under the pointer.
    #[inline]
    pub fn set(&self, value: f32) -> Result<()> {
        self.set_at(0, value)
    }

    /// Overwrite the element `delta` positions from the pointer.
    #[inline]
    pub fn set_at(&self, delta: isize, value: f32) -> Result<()> {
        self.cell(delta)?.set(value);
        Ok(())
    }

    fn span(&self, len: usize) -> Result<&'a [Cell<f32>]> {
        let available = self.cells.len().saturating_sub(self.offset);
        check_len(available, len)?;
        Ok(&self.cells[self.offset..self.offset + len])
    }

    /// Copy `len` elements starting at the pointer.
    pub fn read(&self, len: usize) -> Result<Vec<f32>> {
        Ok(self.span(len)?.iter().map(Cell::get).collect())
    }

    /// Overwrite `values.len()` elements starting at the pointer.
    pub fn write(&self, values: &[f32]) -> Result<()> {
        for (cell, v) in self.span(values.len())?.iter().zip(values) {
            cell.set(*v);
        }
        Ok(())
    }

    /// Copy `len` elements from `source` to this pointer. The ranges may overlap.
    pub fn copy_from(&self, source: &FloatPointer<'_>, len: usize) -> Result<()> {
        // check the destination first so a failed copy writes nothing
        self.span(len)?;
        let values = source.read(len)?;
        self.write(&values)
    }

    /// `true` if this pointer addresses the first element of `cells`.
    pub fn is_pointing_to(&self, cells: &[Cell<f32>]) -> bool {
        std::ptr::eq(self.cells, cells) && self.offset == 0
    }

    /// `true` if this pointer addresses an element of `cells`.
    pub fn is_pointing_into(&self, cells: &[Cell<f32>]) -> bool {
        std::ptr::eq(self.cells, cells) && self.offset < cells.len()
    }
}

/// A handle to a single float value.
pub trait FloatSmartPointer {
    /// The current value.
    fn get(&self) -> f32;

    /// Overwrite the value.
    fn set(&mut self, value: f32);

    /// Add `a` to the value and return the result.
    fn plus_equals(&mut self, a: f32) -> f32 {
        let v = self.get() + a;
        self.set(v);
        self.get()
    }

    /// Multiply the value by `a` and return the result.
    fn times_equals(&mut self, a: f32) -> f32 {
        let v = self.get() * a;
        self.set(v);
        self.get()
    }
}

/// A handle to a single integer value.
pub trait IntSmartPointer {
    /// The current value.
    fn get(&self) -> i32;

    /// Overwrite the value.
    fn set(&mut self, value: i32);

    /// Add `a` to the value and return the result. Overflow wraps.
    fn plus_equals(&mut self, a: i32) -> i32 {
        let v = self.get().wrapping_add(a);
        self.set(v);
        self.get()
    }

    /// Multiply the value by `a` and return the result. Overflow wraps.
    fn times_equals(&mut self, a: i32) -> i32 {
        let v = self.get().wrapping_mul(a);
        self.set(v);
        self.get()
    }
}

/// One component of a tuple.
#[derive(Debug)]
pub struct FieldPointer<'a, T: TupleElements> {
    target: &'a mut T,
    index: usize,
}

impl<'a, T: TupleElements> FieldPointer<'a, T> {
    /// Point at component `index` of `target`.
    pub fn new(target: &'a mut T, index: usize) -> Result<Self> {
        check_index(index, T::LEN)?;
        Ok(Self { target, index })
    }

    /// The component index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The tuple holding the component.
    #[inline]
    pub fn target(&self) -> &T {
        self.target
    }
}

impl<T: TupleElements> FloatSmartPointer for FieldPointer<'_, T> {
    fn get(&self) -> f32 {
        let value = self.target.element(self.index);
        debug_assert!(value.is_ok(), "index {} checked in FieldPointer::new", self.index);
        value.unwrap_or(f32::NAN)
    }

    fn set(&mut self, value: f32) {
        let written = self.target.set_element(self.index, value);
        debug_assert!(written.is_ok(), "index {} checked in FieldPointer::new", self.index);
    }
}

/// An integer stored in a [`Cell`].
#[derive(Debug, Clone, Copy)]
pub struct IntCellPointer<'a> {
    cell: &'a Cell<i32>,
}

impl<'a> IntCellPointer<'a> {
    /// Point at `cell`.
    #[inline]
    pub fn new(cell: &'a Cell<i32>) -> Self {
        Self { cell }
    }
}

impl IntSmartPointer for IntCellPointer<'_> {
    #[inline]
    fn get(&self) -> i32 {
        self.cell.get()
    }

    #[inline]
    fn set(&mut self, value: i32) {
        self.cell.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::{Tuple3f, Vector4f};

    #[test]
    fn test_get_set() -> Result<()> {
        let mut data = [1.0, 2.0, 3.0, 4.0];
        let p = FloatPointer::new(&mut data);
        let q = p.offset_by(2)?;
        assert_eq!(q.get()?, 3.0);
        assert_eq!(q.get_at(-1)?, 2.0);
        q.set(30.0)?;
        q.set_at(1, 40.0)?;
        assert_eq!(p.read(4)?, vec![1.0, 2.0, 30.0, 40.0]);
        assert_eq!(data, [1.0, 2.0, 30.0, 40.0]);
        Ok(())
    }

    #[test]
    fn test_bounds() -> Result<()> {
        let mut data = [0.0; 3];
        let p = FloatPointer::new(&mut data);
        assert_eq!(p.get_at(3), Err(VecmathError::IndexOutOfRange(3, 3)));
        assert_eq!(p.get_at(-1), Err(VecmathError::OffsetOutOfRange(-1, 3)));
        assert_eq!(
            p.offset_by(4).map(|p| p.offset()),
            Err(VecmathError::OffsetOutOfRange(4, 3))
        );
        let end = p.offset_by(3)?;
        assert_eq!(end.read(0)?, Vec::<f32>::new());
        assert!(end.get().is_err());
        assert_eq!(p.read(4), Err(VecmathError::InvalidSliceLength(3, 4)));
        assert!(p.offset_by(1)?.write(&[1.0, 2.0, 3.0]).is_err());
        Ok(())
    }

    #[test]
    fn test_extreme_offsets_are_rejected() -> Result<()> {
        let mut data = [1.0, 2.0, 3.0];
        let p = FloatPointer::new(&mut data).offset_by(1)?;
        assert_eq!(
            p.offset_by(isize::MAX).map(|p| p.offset()),
            Err(VecmathError::OffsetOutOfRange(isize::MAX, 3))
        );
        assert_eq!(p.get_at(isize::MAX), Err(VecmathError::OffsetOutOfRange(isize::MAX, 3)));
        assert_eq!(
            p.get_at(isize::MIN),
            Err(VecmathError::OffsetOutOfRange(isize::MIN + 1, 3))
        );
        assert!(p.set_at(isize::MIN, 0.0).is_err());
        assert_eq!(p.get()?, 2.0);
        Ok(())
    }

    #[test]
    fn test_overlapping_copy() -> Result<()> {
        let mut data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let base = FloatPointer::new(&mut data);
        let dst = base.offset_by(1)?;
        dst.copy_from(&base, 3)?;
        assert_eq!(base.read(5)?, vec![1.0, 1.0, 2.0, 3.0, 5.0]);

        // a copy that does not fit leaves the destination untouched
        assert!(dst.offset_by(2)?.copy_from(&base, 3).is_err());
        assert_eq!(base.read(5)?, vec![1.0, 1.0, 2.0, 3.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_pointing() -> Result<()> {
        let mut data = [0.0_f32; 4];
        let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
        let other: Vec<Cell<f32>> = (0..4).map(|_| Cell::new(0.0)).collect();
        let p = FloatPointer::from_cells(cells);
        assert!(p.is_pointing_to(cells));
        assert!(p.is_pointing_into(cells));
        assert!(!p.is_pointing_to(&other));
        let q = FloatPointer::with_offset(cells, 3)?;
        assert!(!q.is_pointing_to(cells));
        assert!(q.is_pointing_into(cells));
        assert!(!q.offset_by(1)?.is_pointing_into(cells));
        assert!(FloatPointer::with_offset(cells, 5).is_err());
        Ok(())
    }

    #[test]
    fn test_field_pointer() -> Result<()> {
        let mut t = Tuple3f::new(1.0, 2.0, 3.0);
        {
            let mut p = FieldPointer::new(&mut t, 1)?;
            assert_eq!(p.get(), 2.0);
            assert_eq!(p.plus_equals(3.0), 5.0);
            assert_eq!(p.times_equals(2.0), 10.0);
            assert_eq!(p.index(), 1);
        }
        assert_eq!(t, Tuple3f::new(1.0, 10.0, 3.0));

        // every valid index reads and writes its own component
        let mut q = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        for index in 0..Vector4f::LEN {
            let mut p = FieldPointer::new(&mut q, index)?;
            assert_eq!(p.get(), (index + 1) as f32);
            p.set(-p.get());
        }
        assert_eq!(q, Vector4f::new(-1.0, -2.0, -3.0, -4.0));

        let mut v = Vector4f::ZERO;
        assert!(FieldPointer::new(&mut v, 4).is_err());
        let mut w = FieldPointer::new(&mut v, 3)?;
        w.set(7.0);
        assert_eq!(w.target().w, 7.0);
        Ok(())
    }

    #[test]
    fn test_int_pointer() {
        let cell = Cell::new(4);
        let mut p = IntCellPointer::new(&cell);
        let mut alias = p;
        assert_eq!(p.plus_equals(6), 10);
        assert_eq!(alias.times_equals(3), 30);
        assert_eq!(cell.get(), 30);
        alias.set(i32::MAX);
        assert_eq!(p.plus_equals(1), i32::MIN);
    }
}

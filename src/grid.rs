use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};

use crate::ebf::{check_dimensions, value_count};
use crate::error::EbfError;

/// A validated grid of grey values.
///
/// Values are held in one contiguous row-major buffer. `height` rows of
/// exactly `width` values each; both dimensions lie in
/// `MIN_DIMENSION..=MAX_DIMENSION`.
#[derive(Clone, Debug)]
pub struct Grid {
    img: ImgVec<u32>,
}

impl Grid {
    /// Build a grid from row-major values.
    ///
    /// Fails with [`EbfError::BadDimensions`] if either dimension is out of
    /// range, or [`EbfError::ValueCountMismatch`] if `values.len()` is not
    /// `height * width`.
    pub fn new(height: u32, width: u32, values: Vec<u32>) -> Result<Self, EbfError> {
        check_dimensions(i64::from(height), i64::from(width))?;
        let expected = value_count(height, width)?;
        if values.len() != expected {
            return Err(EbfError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self::from_parts(values, height, width))
    }

    /// Build a grid from a slice of rows. All rows must share the first row's length.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, EbfError> {
        let height = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let width = rows
            .first()
            .map_or(0, |r| u32::try_from(r.as_ref().len()).unwrap_or(u32::MAX));
        check_dimensions(i64::from(height), i64::from(width))?;
        let expected = value_count(height, width)?;

        if rows.iter().any(|r| r.as_ref().len() != width as usize) {
            let actual = rows
                .iter()
                .fold(0usize, |n, r| n.saturating_add(r.as_ref().len()));
            return Err(EbfError::ValueCountMismatch { expected, actual });
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(expected)
            .map_err(|_| EbfError::AllocationFailure {
                bytes: expected.saturating_mul(core::mem::size_of::<u32>()),
            })?;
        for row in rows {
            values.extend_from_slice(row.as_ref());
        }
        Ok(Self::from_parts(values, height, width))
    }

    /// Caller guarantees `values.len() == height * width` and valid dimensions.
    pub(crate) fn from_parts(values: Vec<u32>, height: u32, width: u32) -> Self {
        Self {
            img: ImgVec::new(values, width as usize, height as usize),
        }
    }

    pub fn height(&self) -> u32 {
        self.img.height() as u32
    }

    pub fn width(&self) -> u32 {
        self.img.width() as u32
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let idx = row as usize * self.img.width() + col as usize;
        self.img.buf().get(idx).copied()
    }

    /// One row of values, or `None` when `row` is out of bounds.
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        if row >= self.height() {
            return None;
        }
        let w = self.img.width();
        let start = row as usize * w;
        self.img.buf().get(start..start + w)
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.img.buf().chunks_exact(self.img.width())
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[u32] {
        self.img.buf()
    }

    /// Borrow as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> ImgRef<'_, u32> {
        self.img.as_ref()
    }

    /// Take ownership of the row-major buffer.
    pub fn into_values(self) -> Vec<u32> {
        self.img.into_buf()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.height() == other.height()
            && self.width() == other.width()
            && self.values() == other.values()
    }
}

impl Eq for Grid {}

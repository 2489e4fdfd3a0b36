//! Row-major integer matrix.

use crate::error::{MatmulError, Result};
use rand::Rng;
use std::fmt;

/// Dense `rows × cols` matrix of `i32`, stored row-major in one allocation.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. Dimensions are fixed at
/// creation; multiplication never resizes a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// The 0×0 matrix returned when operands can't be multiplied.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Allocate a zero-filled matrix.
    ///
    /// Fails with [`MatmulError::Allocation`] if `rows * cols` overflows or the
    /// allocator can't provide the buffer.
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatmulError::Allocation { rows, cols })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatmulError::Allocation { rows, cols })?;
        data.resize(len, 0);

        Ok(Self { rows, cols, data })
    }

    /// Wrap a row-major buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use matmul_threads::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.get(1, 0), 4);
    /// assert_eq!(m.row(0), &[1, 2, 3]);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self> {
        let expected = rows.checked_mul(cols);
        if expected != Some(data.len()) {
            return Err(MatmulError::ShapeMismatch {
                rows,
                cols,
                expected: expected.unwrap_or(usize::MAX),
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Fill a matrix with values drawn uniformly from `[0, upper)`.
    ///
    /// `upper == 0` produces an all-zero matrix.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        upper: i32,
        rng: &mut R,
    ) -> Result<Self> {
        let mut m = Self::zeroed(rows, cols)?;
        if upper > 0 {
            for x in m.data.iter_mut() {
                *x = rng.gen_range(0..upper);
            }
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for a matrix with no cells (including the 0×0 mismatch result).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }
}

/// One line per row: `|` then each element right-aligned in 5 columns and `|`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "|")?;
            for x in self.row(i) {
                write!(f, "{:5}|", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

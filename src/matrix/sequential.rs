use super::dot::dot;
use super::storage::Matrix;
use crate::error::Result;
use tracing::debug;

/// Textbook i-j-k multiplication, one cell at a time on the calling thread.
///
/// This is the correctness baseline the threaded path is checked against,
/// and what a thread count of 0 means in the benchmark.
///
/// Returns the 0×0 matrix when `a.cols() != b.rows()`.
///
/// # Example
///
/// ```
/// use matmul_threads::{Matrix, multiply_sequential};
///
/// let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let b = Matrix::from_vec(3, 2, vec![7, 8, 9, 10, 11, 12]).unwrap();
///
/// let c = multiply_sequential(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
/// ```
pub fn multiply_sequential(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        debug!(
            a_cols = a.cols(),
            b_rows = b.rows(),
            "incompatible operands, returning empty matrix"
        );
        return Ok(Matrix::empty());
    }

    let mut c = Matrix::zeroed(a.rows(), b.cols())?;
    let n = b.cols();
    let out = c.as_mut_slice();
    for i in 0..a.rows() {
        for j in 0..n {
            out[i * n + j] = dot(a, b, i, j);
        }
    }
    Ok(c)
}

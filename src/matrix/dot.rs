use super::storage::Matrix;

/// One output cell of A·B: row `i` of A dotted with column `j` of B.
///
/// Accumulates in wrapping `i32`, so overflow wraps instead of panicking
/// and results stay bit-exact across the sequential and threaded paths.
///
/// Callers guarantee `a.cols() == b.rows()`, `i < a.rows()` and `j < b.cols()`.
#[inline]
pub fn dot(a: &Matrix, b: &Matrix, i: usize, j: usize) -> i32 {
    a.row(i)
        .iter()
        .enumerate()
        .fold(0i32, |acc, (k, &x)| acc.wrapping_add(x.wrapping_mul(b.get(k, j))))
}

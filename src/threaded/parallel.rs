//! Multi-threaded multiplication over a flat partition of output cells.

use super::distribute::distribute;
use crate::error::{MatmulError, Result};
use crate::matrix::dot::dot;
use crate::matrix::storage::Matrix;
use std::thread;
use tracing::{debug, trace};

/// Multiply `a` by `b` with the output cells split across `thread_count` slots.
///
/// The result's `m × n` cells are numbered row-major and divided by
/// [`distribute`]. Slot 0 runs on the calling thread; every other slot with
/// work gets its own scoped thread. Each slot owns a contiguous, disjoint
/// piece of the output buffer, so workers write without any locking. All
/// workers are joined before the result is returned.
///
/// Returns the 0×0 matrix when `a.cols() != b.rows()`.
///
/// # Errors
///
/// - [`MatmulError::NoSlots`] if `thread_count == 0` (use
///   [`crate::multiply`] to route that to the sequential path)
/// - [`MatmulError::Allocation`] if the result can't be allocated
/// - [`MatmulError::Spawn`] if a worker thread can't be created
///
/// # Example
///
/// ```
/// use matmul_threads::{Matrix, multiply_parallel, multiply_sequential};
///
/// let a = Matrix::from_vec(3, 3, vec![25, 26, 90, 14, 36, 1, 3, 9, 6]).unwrap();
///
/// let c = multiply_parallel(&a, &a, 4).unwrap();
/// assert_eq!(c.row(0), &[1259, 2396, 2816]);
/// assert_eq!(c, multiply_sequential(&a, &a).unwrap());
/// ```
pub fn multiply_parallel(a: &Matrix, b: &Matrix, thread_count: usize) -> Result<Matrix> {
    if a.cols() != b.rows() {
        debug!(
            a_cols = a.cols(),
            b_rows = b.rows(),
            "incompatible operands, returning empty matrix"
        );
        return Ok(Matrix::empty());
    }

    let mut c = Matrix::zeroed(a.rows(), b.cols())?;
    let total_cells = a.rows() * b.cols();
    let plan = distribute(total_cells, thread_count)?;
    debug!(total_cells, thread_count, ?plan, "partitioned output cells");

    let (inline, mut rest) = c.as_mut_slice().split_at_mut(plan[0]);

    thread::scope(|s| -> Result<()> {
        let mut start = plan[0];
        for (slot, &count) in plan.iter().enumerate().skip(1) {
            if count == 0 {
                continue;
            }
            let (cells, tail) = std::mem::take(&mut rest).split_at_mut(count);
            rest = tail;

            trace!(slot, start, count, "spawning worker");
            thread::Builder::new()
                .name(format!("matmul-{slot}"))
                .spawn_scoped(s, move || compute_range(a, b, cells, start))
                .map_err(|source| MatmulError::Spawn { slot, source })?;
            start += count;
        }

        compute_range(a, b, inline, 0);
        Ok(())
    })?;

    Ok(c)
}

/// Fill `out` with the cells starting at flat index `start`, walking row-major.
fn compute_range(a: &Matrix, b: &Matrix, out: &mut [i32], start: usize) {
    if out.is_empty() {
        return;
    }

    let n = b.cols();
    let (mut i, mut j) = (start / n, start % n);
    for cell in out.iter_mut() {
        *cell = dot(a, b, i, j);
        j += 1;
        if j == n {
            j = 0;
            i += 1;
        }
    }
}

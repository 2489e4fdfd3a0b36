//! Integer matrix multiplication, sequential vs. statically partitioned threads.
//!
//! The interesting part is how the work gets split. The `m × n` output cells
//! are numbered row-major and handed out as contiguous ranges, one per thread
//! slot, before any thread starts. Ranges never overlap, so the workers write
//! straight into the shared result with no locks.
//!
//! ## Usage
//!
//! ```
//! use matmul_threads::{Matrix, multiply};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//!
//! // 0 threads = plain sequential loop on the calling thread
//! let seq = multiply(&a, &b, 0).unwrap();
//! let par = multiply(&a, &b, 3).unwrap();
//!
//! assert_eq!(seq.as_slice(), &[19, 22, 43, 50]);
//! assert_eq!(seq, par);
//! ```
//!
//! Operands that don't line up (`a.cols() != b.rows()`) give back the 0×0
//! matrix rather than an error.
//!
//! ## What's inside
//!
//! - `threaded::distribute`: even split with the remainder on the last slot
//! - `threaded::parallel`: disjoint-range dispatch with `std::thread::scope`
//! - `matrix`: flat row-major storage, dot product, sequential baseline
//! - `sweep`: the fixed benchmark the binary runs

pub mod error;
pub mod matrix;
pub mod sweep;
pub mod threaded;

pub use error::{MatmulError, Result};
pub use matrix::dot::dot;
pub use matrix::sequential::multiply_sequential;
pub use matrix::storage::Matrix;
pub use threaded::distribute::distribute;
pub use threaded::parallel::multiply_parallel;

/// Matrix multiply: returns A * B.
///
/// `thread_count == 0` runs [`multiply_sequential`]; anything else runs
/// [`multiply_parallel`] with that many slots.
pub fn multiply(a: &Matrix, b: &Matrix, thread_count: usize) -> Result<Matrix> {
    if thread_count == 0 {
        multiply_sequential(a, b)
    } else {
        multiply_parallel(a, b, thread_count)
    }
}

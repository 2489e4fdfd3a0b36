//! Matrix storage and the single-threaded multiplication baseline.
//!
//! The threaded implementation in [`crate::threaded`] reuses [`dot::dot`] per
//! cell, so both paths produce bit-identical results.

pub mod dot;
pub mod sequential;
pub mod storage;

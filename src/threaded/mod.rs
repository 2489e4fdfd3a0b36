//! Multi-threaded multiplication.
//!
//! The output matrix is treated as a flat run of `m × n` cells. That run is
//! cut into one contiguous range per thread slot before any thread starts,
//! so workers never share a cell and need no synchronization beyond the
//! final join.
//!
//! - `distribute`: how many cells each slot gets
//! - `parallel`: offsets, dispatch and join

pub mod distribute;
pub mod parallel;

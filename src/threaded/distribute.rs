//! Static split of output cells across thread slots.

use crate::error::{MatmulError, Result};

/// Split `total_cells` output cells across `slot_count` slots.
///
/// Every slot gets `total_cells / slot_count` cells (at least 1), and the last
/// slot takes whatever is left over. Once all cells are handed out the
/// remaining slots get 0, so with more slots than cells the work lands on the
/// first `total_cells` slots one cell each instead of being spread thin.
///
/// The returned plan always has `slot_count` entries and sums to `total_cells`.
///
/// # Errors
///
/// - [`MatmulError::NoSlots`] if `slot_count == 0`
/// - [`MatmulError::PlanAllocation`] if the plan itself can't be allocated
///
/// # Example
///
/// ```
/// use matmul_threads::threaded::distribute::distribute;
///
/// assert_eq!(distribute(10, 3).unwrap(), vec![3, 3, 4]);
/// assert_eq!(distribute(5, 8).unwrap(), vec![1, 1, 1, 1, 1, 0, 0, 0]);
/// ```
pub fn distribute(total_cells: usize, slot_count: usize) -> Result<Vec<usize>> {
    if slot_count == 0 {
        return Err(MatmulError::NoSlots);
    }

    let per_slot = (total_cells / slot_count).max(1);
    let mut plan = Vec::new();
    plan.try_reserve_exact(slot_count)
        .map_err(|_| MatmulError::PlanAllocation { slots: slot_count })?;
    plan.resize(slot_count, 0);
    let mut remaining = total_cells;

    for (slot, count) in plan.iter_mut().enumerate() {
        if remaining == 0 {
            break;
        }
        *count = if slot == slot_count - 1 {
            remaining
        } else {
            per_slot
        };
        remaining -= *count;
    }

    Ok(plan)
}

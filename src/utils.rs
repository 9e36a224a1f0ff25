//! The recurrence step shared by every formulation.
//!
//! The "take" branch of an item is an `Option`: it is `None` whenever the item
//! does not fit, so an infeasible choice can never win the max no matter how
//! large the feasible values are.

use crate::instance::Item;

/// Value of taking `item` with `budget` capacity available, given a lookup for
/// the optimal value of the leftover budget.
///
/// Returns `None` when `item.weight > budget`; `rest` is not evaluated then.
#[inline]
pub fn take_value<F>(item: Item, budget: usize, rest: F) -> Option<u64>
where
    F: FnOnce(usize) -> u64,
{
    budget
        .checked_sub(item.weight)
        .map(|left| item.value + rest(left))
}

/// Best of skipping or (if feasible) taking.
#[inline]
pub fn best_of(skip: u64, take: Option<u64>) -> u64 {
    match take {
        Some(take) => skip.max(take),
        None => skip,
    }
}

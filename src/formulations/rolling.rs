//! Single-row variant of the prefix formulation.
//!
//! `row[w]` holds `g(k, w)` after item `k-1` has been folded in. Budgets are
//! visited from high to low so that `row[w - weight]` still holds `g(k-1, ·)`
//! when it is read, which keeps every item a 0/1 decision.

use crate::instance::KnapsackInstance;
use crate::utils::{best_of, take_value};

/// `g(n, capacity)` in `O(capacity)` space.
pub fn solve(instance: &KnapsackInstance) -> u64 {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "prefix_rolling",
        items = instance.len(),
        capacity = instance.capacity()
    )
    .entered();

    let mut row = vec![0u64; instance.capacity() + 1];
    for item in instance.items() {
        for w in (item.weight..row.len()).rev() {
            let take = take_value(item, w, |left| row[left]);
            row[w] = best_of(row[w], take);
        }
    }
    row[instance.capacity()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_not_reused() {
        // An unbounded knapsack would take item 0 three times for 15.
        let p = KnapsackInstance::new(vec![2], vec![5], 6).unwrap();
        assert_eq!(solve(&p), 5);
    }

    #[test]
    fn exact_fit() {
        let p = KnapsackInstance::new(vec![1, 2, 3], vec![6, 10, 12], 5).unwrap();
        assert_eq!(solve(&p), 22);
    }

    #[test]
    fn zero_weight_items_counted_once() {
        let p = KnapsackInstance::new(vec![0, 0], vec![3, 4], 0).unwrap();
        assert_eq!(solve(&p), 7);
    }
}

//! "Index, remaining capacity" formulation.
//!
//! State `(i, c)` is the optimal value obtainable from items `i..n` when `c`
//! capacity is still available:
//!
//! ```text
//! f(i, c) = 0                                              if i >= n
//! f(i, c) = max(f(i+1, c), values[i] + f(i+1, c - weights[i]))
//!                                   (take branch only if c >= weights[i])
//! ```
//!
//! The answer is `f(0, capacity)`. Zero remaining capacity is not a base case
//! on its own: weight-0 items still fit and are picked up by the gate.

use crate::grid::Grid;
use crate::instance::KnapsackInstance;
use crate::utils::{best_of, take_value};

/// Top-down evaluation of `f(0, capacity)` with a dense memo table.
///
/// Recursion depth is `n + 1`.
pub fn solve_memo(instance: &KnapsackInstance) -> u64 {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "suffix_memo",
        items = instance.len(),
        capacity = instance.capacity()
    )
    .entered();

    let mut memo = Grid::new(instance.len(), instance.capacity() + 1, None);
    descend(instance, &mut memo, 0, instance.capacity())
}

fn descend(instance: &KnapsackInstance, memo: &mut Grid<Option<u64>>, i: usize, c: usize) -> u64 {
    if i >= instance.len() {
        return 0;
    }
    if let Some(cached) = *memo.get(i, c) {
        return cached;
    }

    let skip = descend(instance, memo, i + 1, c);
    let take = take_value(instance.item(i), c, |left| descend(instance, memo, i + 1, left));
    let best = best_of(skip, take);

    memo.set(i, c, Some(best));
    best
}

/// Bottom-up tabulation over an `(n+1) x (capacity+1)` grid.
///
/// Row `n` is the base case; rows are filled from `n-1` down to `0`, each one
/// reading only the row below it.
pub fn solve_table(instance: &KnapsackInstance) -> u64 {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "suffix_table",
        items = instance.len(),
        capacity = instance.capacity()
    )
    .entered();

    let grid = fill_table(instance);
    *grid.get(0, instance.capacity())
}

/// The full table; `grid[i][c] == f(i, c)`.
pub fn fill_table(instance: &KnapsackInstance) -> Grid<u64> {
    let n = instance.len();
    let cols = instance.capacity() + 1;
    let mut grid = Grid::new(n + 1, cols, 0u64);
    grid.fill_row(n, 0);

    for i in (0..n).rev() {
        let item = instance.item(i);
        let (below, row) = grid.row_pair_mut(i + 1, i);
        for (c, cell) in row.iter_mut().enumerate() {
            let take = take_value(item, c, |left| below[left]);
            *cell = best_of(below[c], take);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(weights: &[usize], values: &[u64], capacity: usize) -> KnapsackInstance {
        KnapsackInstance::new(weights.to_vec(), values.to_vec(), capacity).unwrap()
    }

    #[test]
    fn basic_case() {
        let p = inst(&[2, 3, 4, 5], &[3, 4, 5, 6], 8);
        assert_eq!(solve_memo(&p), 10);
        assert_eq!(solve_table(&p), 10);
    }

    #[test]
    fn table_rows_are_suffix_optima() {
        let p = inst(&[1, 2, 3], &[6, 10, 12], 5);
        let g = fill_table(&p);
        // Only item 2 left: worth 12 once c >= 3.
        assert_eq!(g.row(2), &[0, 0, 0, 12, 12, 12]);
        // Base row.
        assert_eq!(g.row(3), &[0; 6]);
        assert_eq!(*g.get(0, 5), 22);
    }

    #[test]
    fn zero_weight_item_at_zero_capacity() {
        let p = inst(&[0, 1], &[7, 3], 0);
        assert_eq!(solve_memo(&p), 7);
        assert_eq!(solve_table(&p), 7);
    }

    #[test]
    fn zero_weight_item_after_budget_is_spent() {
        // Taking item 0 uses the whole budget; item 1 is still free.
        let p = inst(&[4, 0], &[10, 5], 4);
        assert_eq!(solve_memo(&p), 15);
        assert_eq!(solve_table(&p), 15);
    }

    #[test]
    fn empty_instance() {
        let p = inst(&[], &[], 10);
        assert_eq!(solve_memo(&p), 0);
        assert_eq!(solve_table(&p), 0);
    }
}

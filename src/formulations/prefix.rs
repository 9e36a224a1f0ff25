//! "Items processed, total capacity" formulation.
//!
//! State `(k, w)` is the optimal value obtainable from the first `k` items
//! under an absolute budget `w`:
//!
//! ```text
//! g(0, w) = 0
//! g(k, w) = max(g(k-1, w), values[k-1] + g(k-1, w - weights[k-1]))
//!                                  (take branch only if w >= weights[k-1])
//! ```
//!
//! The answer is `g(n, capacity)`. This walks the same optimization as
//! [`suffix`](super::suffix) from the opposite end of the item list.

use crate::grid::Grid;
use crate::instance::KnapsackInstance;
use crate::utils::{best_of, take_value};

/// Top-down evaluation of `g(n, capacity)` with a dense memo table.
pub fn solve_memo(instance: &KnapsackInstance) -> u64 {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "prefix_memo",
        items = instance.len(),
        capacity = instance.capacity()
    )
    .entered();

    // Row k holds g(k, ·) for k in 1..=n; row 0 is never consulted.
    let mut memo = Grid::new(instance.len() + 1, instance.capacity() + 1, None);
    ascend(instance, &mut memo, instance.len(), instance.capacity())
}

fn ascend(instance: &KnapsackInstance, memo: &mut Grid<Option<u64>>, k: usize, w: usize) -> u64 {
    if k == 0 {
        return 0;
    }
    if let Some(cached) = *memo.get(k, w) {
        return cached;
    }

    let skip = ascend(instance, memo, k - 1, w);
    let take = take_value(instance.item(k - 1), w, |left| ascend(instance, memo, k - 1, left));
    let best = best_of(skip, take);

    memo.set(k, w, Some(best));
    best
}

/// Bottom-up tabulation: row `0` is zero, rows `1..=n` built upward.
pub fn solve_table(instance: &KnapsackInstance) -> u64 {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "prefix_table",
        items = instance.len(),
        capacity = instance.capacity()
    )
    .entered();

    let grid = fill_table(instance);
    *grid.get(instance.len(), instance.capacity())
}

/// The full table; `grid[k][w] == g(k, w)`.
pub fn fill_table(instance: &KnapsackInstance) -> Grid<u64> {
    let n = instance.len();
    let mut grid = Grid::new(n + 1, instance.capacity() + 1, 0u64);
    grid.fill_row(0, 0);

    for k in 1..=n {
        let item = instance.item(k - 1);
        let (prev, row) = grid.row_pair_mut(k - 1, k);
        for (w, cell) in row.iter_mut().enumerate() {
            let take = take_value(item, w, |left| prev[left]);
            *cell = best_of(prev[w], take);
        }
    }
    grid
}

//! The seam between the consistency checker and individual solving methods.
//!
//! Every formulation of the recurrence is exposed as a [`KnapsackSolver`]:
//! a stateless value that maps an instance to its optimal value. All working
//! storage (memo tables, tabulation grids) is allocated inside `solve` and
//! dropped before it returns, so a solver can be called any number of times,
//! on any number of instances, without interference between calls.

use std::fmt;

use crate::instance::KnapsackInstance;

/// Identifier of a solving method; also the key of a
/// [`ResultSet`](crate::results::ResultSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// State `(i, c)`: items `i..n`, `c` capacity remaining. Memoized recursion.
    SuffixMemo,
    /// State `(i, c)`, filled from row `n` down to row `0`.
    SuffixTable,
    /// State `(k, w)`: first `k` items, budget `w`. Memoized recursion.
    PrefixMemo,
    /// State `(k, w)`, filled from row `0` up to row `n`.
    PrefixTable,
    /// State `(k, w)` over a single row, budget iterated downward.
    PrefixRolling,
}

impl Method {
    /// The four methods every consistency check runs.
    pub const STANDARD: [Method; 4] = [
        Method::SuffixMemo,
        Method::SuffixTable,
        Method::PrefixMemo,
        Method::PrefixTable,
    ];

    /// Short stable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Method::SuffixMemo => "DFS_A",
            Method::SuffixTable => "DP_A",
            Method::PrefixMemo => "DFS_B",
            Method::PrefixTable => "DP_B",
            Method::PrefixRolling => "DP_B_ROLLING",
        }
    }

    /// Inverse of [`Method::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        [
            Method::SuffixMemo,
            Method::SuffixTable,
            Method::PrefixMemo,
            Method::PrefixTable,
            Method::PrefixRolling,
        ]
        .into_iter()
        .find(|m| m.label() == label)
    }

    /// Solve `instance` with the built-in implementation of this method.
    pub fn solve(self, instance: &KnapsackInstance) -> u64 {
        use crate::formulations::{prefix, rolling, suffix};
        match self {
            Method::SuffixMemo => suffix::solve_memo(instance),
            Method::SuffixTable => suffix::solve_table(instance),
            Method::PrefixMemo => prefix::solve_memo(instance),
            Method::PrefixTable => prefix::solve_table(instance),
            Method::PrefixRolling => rolling::solve(instance),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A way of computing the optimal value of a knapsack instance.
///
/// Implementations must be pure: the same instance always yields the same
/// value and the instance is never modified.
pub trait KnapsackSolver {
    /// Which method this solver reports its result under.
    fn method(&self) -> Method;

    /// Optimal achievable value for `instance`.
    fn solve(&self, instance: &KnapsackInstance) -> u64;
}

impl KnapsackSolver for Method {
    fn method(&self) -> Method {
        *self
    }

    fn solve(&self, instance: &KnapsackInstance) -> u64 {
        Method::solve(*self, instance)
    }
}

//! Formulations of the 0/1 knapsack recurrence.
//!
//! - [`suffix`]  : state `(i, c)`, items `i..n` with `c` capacity remaining.
//! - [`prefix`]  : state `(k, w)`, first `k` items under budget `w`.
//! - [`rolling`] : the prefix recurrence kept in a single row.
//!
//! `suffix` and `prefix` each provide a memoized recursive solver and a
//! tabulated iterative solver; together they are the four standard methods.

pub mod prefix;
pub mod rolling;
pub mod suffix;

//! 0/1 knapsack solved by four equivalent dynamic programs.
//!
//! Given `n` items with weights and values and a capacity, the crate computes
//! the best total value of a subset whose total weight fits the capacity. It
//! does so four ways and checks that they agree:
//!
//! | method  | state                                  | evaluation          |
//! |---------|----------------------------------------|---------------------|
//! | `DFS_A` | `(i, c)`: items `i..n`, `c` remaining  | memoized recursion  |
//! | `DP_A`  | `(i, c)`                               | tabulation, `n → 0` |
//! | `DFS_B` | `(k, w)`: first `k` items, budget `w`  | memoized recursion  |
//! | `DP_B`  | `(k, w)`                               | tabulation, `0 → n` |
//!
//! The two state spaces walk the item list from opposite ends, so agreement
//! between them is a real check rather than a restatement.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{solve_all, KnapsackInstance};
//!
//! let inst = KnapsackInstance::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap();
//! let results = solve_all(&inst).unwrap();
//! assert_eq!(results.agreed_value(), Some(220));
//! ```
//!
//! A "take" branch is only ever considered when the item fits. Infeasible
//! branches are absent from the max instead of being represented by a large
//! negative number. Instances whose values sum past `u64::MAX` are rejected
//! at construction, so no solver can overflow.
//!
//! Only the optimal value is computed; the chosen subset is not reconstructed.

pub mod builder;
pub mod checker;
pub mod error;
pub mod formulations;
pub mod grid;
pub mod instance;
pub mod results;
pub mod scenarios;
pub mod traits;
pub mod utils;

pub use crate::builder::ConsistencyCheckerBuilder;
pub use crate::checker::{solve_all, ConsistencyChecker};
pub use crate::error::{KnapsackError, Result};
pub use crate::instance::{Item, KnapsackInstance};
pub use crate::results::ResultSet;
pub use crate::traits::{KnapsackSolver, Method};

//! Cross-method consistency check.
//!
//! The checker runs every configured solver on the same instance and refuses
//! to return anything but a unanimous [`ResultSet`]. Disagreement is never
//! resolved by majority: it means one formulation is wrong, so the caller gets
//! [`KnapsackError::ConsistencyFailure`] with every value attached.

use crate::builder::ConsistencyCheckerBuilder;
use crate::error::{KnapsackError, Result};
use crate::instance::KnapsackInstance;
use crate::results::ResultSet;
use crate::traits::{KnapsackSolver, Method};

/// Smallest number of solvers a check can compare.
pub const MIN_SOLVERS: usize = 2;

/// Runs a fixed list of solvers and verifies that they agree.
pub struct ConsistencyChecker {
    solvers: Vec<Box<dyn KnapsackSolver>>,
}

impl ConsistencyChecker {
    /// Checker over the four standard methods.
    pub fn new() -> Self {
        ConsistencyCheckerBuilder::new().build()
    }

    pub fn builder() -> ConsistencyCheckerBuilder {
        ConsistencyCheckerBuilder::new()
    }

    pub(crate) fn from_solvers(solvers: Vec<Box<dyn KnapsackSolver>>) -> Self {
        Self { solvers }
    }

    /// Methods in the order they are run.
    pub fn methods(&self) -> Vec<Method> {
        self.solvers.iter().map(|s| s.method()).collect()
    }

    /// Run every solver without judging the outcome.
    pub fn collect(&self, instance: &KnapsackInstance) -> ResultSet {
        self.solvers
            .iter()
            .map(|solver| {
                let value = solver.solve(instance);
                #[cfg(feature = "tracing")]
                tracing::debug!(method = %solver.method(), value, "solver finished");
                (solver.method(), value)
            })
            .collect()
    }

    /// Run every solver and return the results only if they are unanimous.
    ///
    /// A checker with fewer than two solvers has nothing to compare and fails
    /// with [`KnapsackError::TooFewSolvers`].
    ///
    /// ```
    /// use knapsack_dp::{ConsistencyChecker, KnapsackInstance, Method};
    ///
    /// let inst = KnapsackInstance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 8).unwrap();
    /// let results = ConsistencyChecker::new().check(&inst).unwrap();
    /// assert_eq!(results.len(), 4);
    /// assert_eq!(results.get(Method::PrefixTable), Some(10));
    /// ```
    pub fn check(&self, instance: &KnapsackInstance) -> Result<ResultSet> {
        if self.solvers.len() < MIN_SOLVERS {
            return Err(KnapsackError::TooFewSolvers {
                configured: self.solvers.len(),
            });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "consistency_check",
            items = instance.len(),
            capacity = instance.capacity()
        )
        .entered();

        let results = self.collect(instance);
        if results.is_consistent() {
            Ok(results)
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!(%results, "solvers disagree");
            Err(KnapsackError::ConsistencyFailure { results })
        }
    }

    /// Like [`check`](Self::check) but returns only the agreed optimum.
    pub fn solve(&self, instance: &KnapsackInstance) -> Result<u64> {
        let configured = self.solvers.len();
        self.check(instance)?
            .agreed_value()
            .ok_or(KnapsackError::TooFewSolvers { configured })
    }
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check `instance` with the four standard methods.
pub fn solve_all(instance: &KnapsackInstance) -> Result<ResultSet> {
    ConsistencyChecker::new().check(instance)
}

use crate::checker::ConsistencyChecker;
use crate::traits::{KnapsackSolver, Method};

/// Configures which solvers a [`ConsistencyChecker`] runs.
///
/// Solvers are keyed by [`Method`]: adding a solver whose method is already
/// present replaces the earlier one in place.
pub struct ConsistencyCheckerBuilder {
    solvers: Vec<Box<dyn KnapsackSolver>>,
}

impl ConsistencyCheckerBuilder {
    /// Start from the four standard methods.
    pub fn new() -> Self {
        let mut builder = Self::empty();
        for m in Method::STANDARD {
            builder = builder.with_solver(m);
        }
        builder
    }

    fn empty() -> Self {
        Self {
            solvers: Vec::new(),
        }
    }

    /// Drop every solver configured so far.
    ///
    /// At least two solvers must be added back before the checker can run a
    /// check; see [`KnapsackError::TooFewSolvers`](crate::KnapsackError::TooFewSolvers).
    pub fn without_standard(mut self) -> Self {
        self.solvers.clear();
        self
    }

    pub fn with_solver<S>(mut self, solver: S) -> Self
    where
        S: KnapsackSolver + 'static,
    {
        let method = solver.method();
        match self.solvers.iter_mut().find(|s| s.method() == method) {
            Some(slot) => *slot = Box::new(solver),
            None => self.solvers.push(Box::new(solver)),
        }
        self
    }

    /// Also run the single-row prefix solver.
    pub fn with_rolling_row(self) -> Self {
        self.with_solver(Method::PrefixRolling)
    }

    pub fn build(self) -> ConsistencyChecker {
        ConsistencyChecker::from_solvers(self.solvers)
    }
}

impl Default for ConsistencyCheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_methods() {
        let checker = ConsistencyCheckerBuilder::new().build();
        assert_eq!(checker.methods(), Method::STANDARD.to_vec());
    }

    #[test]
    fn rolling_row_is_appended() {
        let checker = ConsistencyCheckerBuilder::new().with_rolling_row().build();
        let methods = checker.methods();
        assert_eq!(methods.len(), 5);
        assert_eq!(methods.last(), Some(&Method::PrefixRolling));
    }

    #[test]
    fn same_method_replaces_in_place() {
        let checker = ConsistencyCheckerBuilder::new()
            .with_solver(Method::SuffixTable)
            .build();
        assert_eq!(checker.methods(), Method::STANDARD.to_vec());
    }

    #[test]
    fn custom_selection() {
        let checker = ConsistencyCheckerBuilder::new()
            .without_standard()
            .with_solver(Method::PrefixTable)
            .with_rolling_row()
            .build();
        assert_eq!(
            checker.methods(),
            vec![Method::PrefixTable, Method::PrefixRolling]
        );
    }
}

//! Fixed battery of named scenarios with known optima.
//!
//! Each scenario is run through a [`ConsistencyChecker`] and every method's
//! value is compared against the expected optimum. A disagreement between
//! methods is recorded in the report instead of aborting the battery, so one
//! broken formulation still lets the remaining scenarios run.

use crate::checker::ConsistencyChecker;
use crate::error::{KnapsackError, Result};
use crate::instance::KnapsackInstance;
use crate::results::ResultSet;
use crate::traits::Method;

/// A named instance with its known optimal value.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub weights: Vec<usize>,
    pub values: Vec<u64>,
    pub capacity: usize,
    pub expected: u64,
}

impl Scenario {
    pub fn new(
        name: &'static str,
        weights: &[usize],
        values: &[u64],
        capacity: usize,
        expected: u64,
    ) -> Self {
        Self {
            name,
            weights: weights.to_vec(),
            values: values.to_vec(),
            capacity,
            expected,
        }
    }

    pub fn instance(&self) -> Result<KnapsackInstance> {
        KnapsackInstance::new(self.weights.clone(), self.values.clone(), self.capacity)
    }
}

/// The nine reference scenarios.
pub fn standard_battery() -> Vec<Scenario> {
    vec![
        Scenario::new("Basic case", &[2, 3, 4, 5], &[3, 4, 5, 6], 8, 10),
        Scenario::new("Exact fit", &[1, 2, 3], &[6, 10, 12], 5, 22),
        Scenario::new("No solution", &[5, 6, 7], &[10, 20, 30], 4, 0),
        Scenario::new("Zero capacity", &[1, 2, 3], &[4, 5, 6], 0, 0),
        Scenario::new("Zero items", &[], &[], 10, 0),
        Scenario::new("Heavy items", &[10, 20, 30], &[60, 100, 120], 50, 220),
        Scenario::new("Fractional temptation", &[3, 4, 5], &[30, 50, 60], 8, 90),
        Scenario::new("Large values", &[2, 4, 6], &[100, 1000, 10000], 6, 10000),
        Scenario::new("Duplicate items", &[3, 3, 3], &[5, 5, 5], 6, 10),
    ]
}

/// Outcome of one method on one scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodOutcome {
    pub method: Method,
    pub value: u64,
    pub passed: bool,
}

/// Outcome of one scenario across all methods.
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcomes: Vec<MethodOutcome>,
    /// `true` when every method returned the same value.
    pub consistent: bool,
}

impl ScenarioReport {
    /// Every method matched the expected value and all agreed.
    pub fn passed(&self) -> bool {
        self.consistent && self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &MethodOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Run `scenario` through `checker`.
///
/// Malformed scenarios and under-configured checkers are returned as errors;
/// method disagreement ends up in [`ScenarioReport::consistent`].
pub fn run_scenario(checker: &ConsistencyChecker, scenario: &Scenario) -> Result<ScenarioReport> {
    let instance = scenario.instance()?;
    let (results, consistent) = match checker.check(&instance) {
        Ok(results) => (results, true),
        Err(KnapsackError::ConsistencyFailure { results }) => (results, false),
        Err(other) => return Err(other),
    };
    Ok(report_from(scenario, &results, consistent))
}

fn report_from(scenario: &Scenario, results: &ResultSet, consistent: bool) -> ScenarioReport {
    let outcomes = results
        .iter()
        .map(|(method, value)| MethodOutcome {
            method,
            value,
            passed: value == scenario.expected,
        })
        .collect();
    ScenarioReport {
        scenario: scenario.clone(),
        outcomes,
        consistent,
    }
}

/// Run every scenario in `battery` through `checker`.
pub fn run_battery(
    checker: &ConsistencyChecker,
    battery: &[Scenario],
) -> Result<Vec<ScenarioReport>> {
    battery.iter().map(|s| run_scenario(checker, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::KnapsackSolver;

    #[test]
    fn battery_has_nine_valid_scenarios() {
        let battery = standard_battery();
        assert_eq!(battery.len(), 9);
        assert!(battery.iter().all(|s| s.instance().is_ok()));
    }

    #[test]
    fn standard_battery_passes() {
        let reports = run_battery(&ConsistencyChecker::new(), &standard_battery()).unwrap();
        for r in &reports {
            assert!(r.passed(), "{} failed: {:?}", r.scenario.name, r.outcomes);
            assert_eq!(r.outcomes.len(), 4);
        }
    }

    #[test]
    fn disagreement_is_reported_not_raised() {
        struct AlwaysZero;
        impl KnapsackSolver for AlwaysZero {
            fn method(&self) -> Method {
                Method::PrefixMemo
            }
            fn solve(&self, _instance: &KnapsackInstance) -> u64 {
                0
            }
        }

        let checker = ConsistencyChecker::builder().with_solver(AlwaysZero).build();
        let scenario = Scenario::new("Basic case", &[2, 3, 4, 5], &[3, 4, 5, 6], 8, 10);
        let report = run_scenario(&checker, &scenario).unwrap();
        assert!(!report.consistent);
        assert!(!report.passed());
        let failed: Vec<Method> = report.failures().map(|o| o.method).collect();
        assert_eq!(failed, vec![Method::PrefixMemo]);
    }

    #[test]
    fn malformed_scenario_is_an_error() {
        let bad = Scenario::new("bad", &[1, 2], &[1], 3, 0);
        let err = run_scenario(&ConsistencyChecker::new(), &bad).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInstance { .. }));
    }
}

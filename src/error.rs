//! Error conditions surfaced by the crate.
//!
//! Malformed input is rejected at construction time, so no solver ever sees
//! it. Disagreement between solving methods is detected by the consistency
//! check, which also refuses to run with fewer than two methods.

use thiserror::Error;

use crate::results::ResultSet;

/// Errors produced while building instances or verifying solver agreement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// `weights` and `values` do not pair up item by item.
    #[error("invalid instance: {weights} weights but {values} values")]
    InvalidInstance { weights: usize, values: usize },

    /// The item values sum past `u64::MAX`; an optimum could not be represented.
    #[error("invalid instance: values overflow u64 at item {item}")]
    ValueOverflow { item: usize },

    /// A checker was asked to verify agreement with fewer than two solvers.
    #[error("consistency check needs at least two solvers, {configured} configured")]
    TooFewSolvers { configured: usize },

    /// Two or more solving methods returned different optimal values.
    ///
    /// This always indicates a bug in one of the formulations; the full set of
    /// disputed values is attached so the offending method can be identified.
    #[error("consistency failure: methods disagree ({results})")]
    ConsistencyFailure { results: ResultSet },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Method;

    #[test]
    fn invalid_instance_message_names_both_lengths() {
        let err = KnapsackError::InvalidInstance {
            weights: 3,
            values: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid instance: 3 weights but 2 values"
        );
    }

    #[test]
    fn overflow_message_names_the_item() {
        let err = KnapsackError::ValueOverflow { item: 1 };
        assert_eq!(
            err.to_string(),
            "invalid instance: values overflow u64 at item 1"
        );
    }

    #[test]
    fn consistency_failure_lists_every_method() {
        let mut results = ResultSet::new();
        results.insert(Method::SuffixMemo, 10);
        results.insert(Method::PrefixTable, 9);
        let msg = KnapsackError::ConsistencyFailure { results }.to_string();
        assert!(msg.contains("DFS_A: 10"), "{msg}");
        assert!(msg.contains("DP_B: 9"), "{msg}");
    }
}

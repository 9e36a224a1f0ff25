//! The immutable problem definition shared by every solver.
//!
//! A [`KnapsackInstance`] pairs `weights[k]` with `values[k]` for item `k` and
//! carries a single capacity. Construction is the only place input is
//! validated; solvers borrow the instance and never mutate it.

use crate::error::{KnapsackError, Result};

/// A single item as seen by the solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

/// A 0/1 knapsack instance: `n` items and a capacity ceiling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackInstance {
    weights: Vec<usize>,
    values: Vec<u64>,
    capacity: usize,
}

impl KnapsackInstance {
    /// Build an instance from parallel weight/value sequences.
    ///
    /// Fails with [`KnapsackError::InvalidInstance`] when the lengths differ and
    /// with [`KnapsackError::ValueOverflow`] when the values do not sum within
    /// `u64`. Every value a solver computes is bounded by that sum.
    ///
    /// ```
    /// use knapsack_dp::KnapsackInstance;
    ///
    /// let inst = KnapsackInstance::new(vec![2, 3], vec![3, 4], 5).unwrap();
    /// assert_eq!(inst.len(), 2);
    /// assert!(KnapsackInstance::new(vec![1], vec![], 5).is_err());
    /// ```
    pub fn new(weights: Vec<usize>, values: Vec<u64>, capacity: usize) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(KnapsackError::InvalidInstance {
                weights: weights.len(),
                values: values.len(),
            });
        }
        check_value_total(&values)?;
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Build an instance from already-paired items.
    ///
    /// Fails with [`KnapsackError::ValueOverflow`] like [`KnapsackInstance::new`].
    pub fn from_items<I>(items: I, capacity: usize) -> Result<Self>
    where
        I: IntoIterator<Item = Item>,
    {
        let (weights, values): (Vec<usize>, Vec<u64>) = items
            .into_iter()
            .map(|item| (item.weight, item.value))
            .unzip();
        Self::new(weights, values, capacity)
    }

    /// Number of items `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Item `k` (0-indexed).
    ///
    /// # Panics
    /// Panics if `k >= self.len()`.
    #[inline]
    pub fn item(&self, k: usize) -> Item {
        Item {
            weight: self.weights[k],
            value: self.values[k],
        }
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = Item> + '_ {
        self.weights
            .iter()
            .zip(&self.values)
            .map(|(&weight, &value)| Item { weight, value })
    }

    /// Same items, different capacity.
    pub fn with_capacity(&self, capacity: usize) -> Self {
        Self {
            weights: self.weights.clone(),
            values: self.values.clone(),
            capacity,
        }
    }

    pub fn total_weight(&self) -> usize {
        self.weights.iter().sum()
    }

    /// Sum of all values; fits in `u64` by construction.
    pub fn total_value(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// Reject value lists whose total does not fit in `u64`.
fn check_value_total(values: &[u64]) -> Result<u64> {
    values
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (item, &v)| {
            acc.checked_add(v)
                .ok_or(KnapsackError::ValueOverflow { item })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = KnapsackInstance::new(vec![1, 2, 3], vec![4, 5], 10).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::InvalidInstance {
                weights: 3,
                values: 2
            }
        );
    }

    #[test]
    fn empty_instance_is_valid() {
        let inst = KnapsackInstance::new(vec![], vec![], 10).unwrap();
        assert!(inst.is_empty());
        assert_eq!(inst.capacity(), 10);
        assert_eq!(inst.items().len(), 0);
    }

    #[test]
    fn items_pair_by_position() {
        let inst = KnapsackInstance::new(vec![2, 4, 6], vec![100, 1000, 10000], 6).unwrap();
        let items: Vec<Item> = inst.items().collect();
        assert_eq!(items[1], Item { weight: 4, value: 1000 });
        assert_eq!(inst.item(2), Item { weight: 6, value: 10000 });
        assert_eq!(inst.total_weight(), 12);
        assert_eq!(inst.total_value(), 11100);
    }

    #[test]
    fn from_items_matches_new() {
        let a = KnapsackInstance::new(vec![3, 3], vec![5, 5], 6).unwrap();
        let b = KnapsackInstance::from_items(a.items(), 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_values_that_overflow_when_summed() {
        let half = 1u64 << 63;
        let err = KnapsackInstance::new(vec![1, 1], vec![half, half], 2).unwrap_err();
        assert_eq!(err, KnapsackError::ValueOverflow { item: 1 });

        let items = [Item { weight: 1, value: u64::MAX }, Item { weight: 0, value: 1 }];
        assert!(KnapsackInstance::from_items(items, 1).is_err());
    }

    #[test]
    fn accepts_values_summing_to_exactly_max() {
        let inst = KnapsackInstance::new(vec![1, 1], vec![u64::MAX - 1, 1], 2).unwrap();
        assert_eq!(inst.total_value(), u64::MAX);
    }

    #[test]
    fn with_capacity_keeps_items() {
        let a = KnapsackInstance::new(vec![1, 2], vec![6, 10], 3).unwrap();
        let b = a.with_capacity(7);
        assert_eq!(b.capacity(), 7);
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.values(), b.values());
    }
}

//! Per-method results collected by one consistency check.

use std::fmt;

use crate::traits::Method;

/// Method → optimal value, in the order the methods were run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(Method, u64)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `method`, replacing any earlier entry for it.
    pub fn insert(&mut self, method: Method, value: u64) {
        match self.entries.iter_mut().find(|(m, _)| *m == method) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((method, value)),
        }
    }

    pub fn get(&self, method: Method) -> Option<u64> {
        self.entries
            .iter()
            .find(|(m, _)| *m == method)
            .map(|&(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Method, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// True when every recorded value is identical (vacuously true if empty).
    pub fn is_consistent(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].1 == w[1].1)
    }

    /// The common value, if there is at least one entry and all agree.
    pub fn agreed_value(&self) -> Option<u64> {
        match self.entries.first() {
            Some(&(_, v)) if self.is_consistent() => Some(v),
            _ => None,
        }
    }
}

impl FromIterator<(Method, u64)> for ResultSet {
    fn from_iter<T: IntoIterator<Item = (Method, u64)>>(iter: T) -> Self {
        let mut set = ResultSet::new();
        for (m, v) in iter {
            set.insert(m, v);
        }
        set
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (method, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{method}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_entry() {
        let mut rs = ResultSet::new();
        rs.insert(Method::SuffixMemo, 1);
        rs.insert(Method::PrefixMemo, 2);
        rs.insert(Method::SuffixMemo, 3);
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.get(Method::SuffixMemo), Some(3));
        assert_eq!(rs.get(Method::PrefixTable), None);
    }

    #[test]
    fn agreement() {
        let rs: ResultSet = Method::STANDARD.into_iter().map(|m| (m, 10)).collect();
        assert!(rs.is_consistent());
        assert_eq!(rs.agreed_value(), Some(10));

        let empty = ResultSet::new();
        assert!(empty.is_consistent());
        assert_eq!(empty.agreed_value(), None);
    }

    #[test]
    fn disagreement() {
        let rs: ResultSet = [(Method::SuffixTable, 4), (Method::PrefixTable, 5)]
            .into_iter()
            .collect();
        assert!(!rs.is_consistent());
        assert_eq!(rs.agreed_value(), None);
        assert_eq!(rs.to_string(), "DP_A: 4, DP_B: 5");
    }
}

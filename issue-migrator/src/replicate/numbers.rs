//! Source issue number to target issue number mapping.

use std::collections::HashMap;

/// Maps source issue numbers to the numbers assigned in the target.
///
/// Only issues that were created have an entry. Filled during replication
/// and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueNumberMap {
    numbers: HashMap<u64, u64>,
}

impl IssueNumberMap {
    pub(crate) fn insert(&mut self, source: u64, target: u64) {
        self.numbers.insert(source, target);
    }

    /// Returns the target number for a source issue, if it was created.
    #[must_use]
    pub fn get(&self, source: u64) -> Option<u64> {
        self.numbers.get(&source).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl FromIterator<(u64, u64)> for IssueNumberMap {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

//! Set of changed line numbers for one file.

use std::collections::HashSet;

/// Line numbers considered new in the current diff, kept as strings.
///
/// Membership is an exact string comparison: `"10"` and `"010"` are different
/// lines. Iteration follows insertion order, which for sets read from a diff is
/// ascending line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedLineSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl ChangedLineSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line number. Returns false if it was already present.
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();
        if self.members.contains(&line) {
            return false;
        }
        self.members.insert(line.clone());
        self.ordered.push(line);
        true
    }

    /// Returns true if the line number string is in the set.
    pub fn contains(&self, line: &str) -> bool {
        self.members.contains(line)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ChangedLineSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ChangedLineSet::new();
        for line in iter {
            set.insert(line);
        }
        set
    }
}

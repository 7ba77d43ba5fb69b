//! Segment names to leave out of the tree

use std::collections::HashSet;

/// A set of exact path-segment names (e.g. `.git`, `node_modules`).
///
/// Matching is exact and case-sensitive; there is no globbing. A name in the
/// set suppresses that segment and everything below it at any depth.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one or more comma-separated names. Adding a name twice is a no-op.
    pub fn add(&mut self, names: &str) {
        for name in names.split(',') {
            if !name.is_empty() {
                self.names.insert(name.to_string());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

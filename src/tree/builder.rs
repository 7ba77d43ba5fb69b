//! Feeding raw paths from a source into a tree

use tracing::trace;

use crate::exclude::ExclusionSet;

use super::node::PathTree;

/// Receiver for raw path strings discovered by a source adapter.
///
/// Adapters call `add_path` once per entry, in whatever order they find them.
pub trait PathSink {
    fn add_path(&mut self, raw: &str);
}

impl PathSink for Vec<String> {
    fn add_path(&mut self, raw: &str) {
        self.push(raw.to_string());
    }
}

/// Builds a [`PathTree`] for one input, applying a fixed exclusion set.
pub struct TreeBuilder<'a> {
    tree: PathTree,
    exclusions: &'a ExclusionSet,
    added: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(exclusions: &'a ExclusionSet) -> Self {
        Self {
            tree: PathTree::new(),
            exclusions,
            added: 0,
        }
    }

    /// Number of raw paths received so far.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Sort and hand over the finished tree.
    pub fn finish(self) -> PathTree {
        let mut tree = self.tree;
        tree.sort();
        tree
    }
}

impl PathSink for TreeBuilder<'_> {
    fn add_path(&mut self, raw: &str) {
        trace!(path = raw, "adding path");
        self.added += 1;
        self.tree.add_path(raw, self.exclusions);
    }
}

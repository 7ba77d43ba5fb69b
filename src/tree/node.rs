//! Prefix-compressed path tree

use serde::Serialize;

use crate::exclude::ExclusionSet;

use super::path::segments;

/// One path segment at a specific position in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the direct child with exactly this name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Information handed to the callback of [`PathTree::walk_depth`].
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub name: &'a str,
    /// Segment names from the top of the tree down to and including this node.
    pub parts: &'a [&'a str],
    /// Zero for top-level entries.
    pub depth: usize,
    pub is_leaf: bool,
}

/// A multi-way tree keyed by path segment.
///
/// The root is synthetic: it has no name and is never visited, so the tree is
/// represented by its list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathTree {
    roots: Vec<TreeNode>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Look up a node by its full segment path.
    pub fn get(&self, parts: &[&str]) -> Option<&TreeNode> {
        let (first, rest) = parts.split_first()?;
        let mut node = self.roots.iter().find(|n| n.name == *first)?;
        for part in rest {
            node = node.child(part)?;
        }
        Some(node)
    }

    /// Total number of nodes, excluding the synthetic root.
    pub fn len(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Normalize a raw path and insert its segments.
    pub fn add_path(&mut self, raw: &str, exclusions: &ExclusionSet) {
        let parts = segments(raw);
        self.insert(&parts, exclusions);
    }

    /// Insert a segment sequence, sharing any existing prefix.
    ///
    /// Insertion stops at the first excluded segment: no node is created for
    /// it or anything after it. Nodes that already exist are never removed.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S], exclusions: &ExclusionSet) {
        insert_into(&mut self.roots, segments, exclusions);
    }

    /// Order children by byte-wise name comparison at every level.
    pub fn sort(&mut self) {
        sort_nodes(&mut self.roots);
    }

    /// Pre-order depth-first walk over every node.
    ///
    /// Stops at the first error returned by `visit` and hands it back.
    pub fn walk_depth<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(Visit<'_>) -> Result<(), E>,
    {
        let mut parts = Vec::new();
        walk_nodes(&self.roots, &mut parts, 0, &mut visit)
    }
}

fn insert_into<S: AsRef<str>>(
    children: &mut Vec<TreeNode>,
    segments: &[S],
    exclusions: &ExclusionSet,
) {
    let Some((head, tail)) = segments.split_first() else {
        return;
    };
    let head = head.as_ref();

    // Checked even when the child already exists, so nothing new grows through it.
    if exclusions.contains(head) {
        return;
    }

    let index = match children.iter().position(|c| c.name == head) {
        Some(i) => i,
        None => {
            children.push(TreeNode::new(head));
            children.len() - 1
        }
    };
    insert_into(&mut children[index].children, tail, exclusions);
}

fn sort_nodes(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    for node in nodes {
        sort_nodes(&mut node.children);
    }
}

fn walk_nodes<'t, E, F>(
    nodes: &'t [TreeNode],
    parts: &mut Vec<&'t str>,
    depth: usize,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(Visit<'_>) -> Result<(), E>,
{
    for node in nodes {
        parts.push(&node.name);
        visit(Visit {
            name: &node.name,
            parts: parts.as_slice(),
            depth,
            is_leaf: node.is_leaf(),
        })?;
        walk_nodes(&node.children, parts, depth + 1, visit)?;
        parts.pop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(paths: &[&str], exclusions: &ExclusionSet) -> PathTree {
        let mut tree = PathTree::new();
        for path in paths {
            tree.add_path(path, exclusions);
        }
        tree.sort();
        tree
    }

    fn visited(tree: &PathTree) -> Vec<(String, usize)> {
        let mut out = Vec::new();
        tree.walk_depth(|v| {
            out.push((v.parts.join("/"), v.depth));
            Ok::<_, ()>(())
        })
        .unwrap();
        out
    }

    #[test]
    fn test_prefix_sharing() {
        let tree = build(&["a/b/c", "a/b/d"], &ExclusionSet::new());
        assert_eq!(tree.roots().len(), 1);
        let a = &tree.roots()[0];
        assert_eq!(a.name, "a");
        assert_eq!(a.children.len(), 1);
        let b = &a.children[0];
        assert_eq!(b.name, "b");
        let names: Vec<&str> = b.children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["c", "d"]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_same_name_at_unrelated_positions() {
        let tree = build(&["a/src", "b/src", "src"], &ExclusionSet::new());
        assert!(tree.get(&["a", "src"]).is_some());
        assert!(tree.get(&["b", "src"]).is_some());
        assert!(tree.get(&["src"]).is_some());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let paths = ["z/y", "a/b/c", "a/b", "m", "a/x", "z/a/q"];
        let mut reversed = paths;
        reversed.reverse();
        let mut shuffled = paths;
        shuffled.swap(0, 3);
        shuffled.swap(1, 5);

        let none = ExclusionSet::new();
        let expected = visited(&build(&paths, &none));
        assert_eq!(visited(&build(&reversed, &none)), expected);
        assert_eq!(visited(&build(&shuffled, &none)), expected);
    }

    #[test]
    fn test_excluded_segment_cuts_subtree() {
        let exclusions: ExclusionSet = ["b"].into_iter().collect();
        let tree = build(&["a/b/c"], &exclusions);
        let a = tree.get(&["a"]).expect("a should exist");
        assert!(a.children.is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_exclusion_applies_at_any_depth() {
        let exclusions: ExclusionSet = ["b"].into_iter().collect();
        let tree = build(&["x/y/b/z", "x/y/w"], &exclusions);
        let y = tree.get(&["x", "y"]).expect("x/y should exist");
        let names: Vec<&str> = y.children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["w"]);
    }

    #[test]
    fn test_excluded_top_level_segment() {
        let exclusions: ExclusionSet = [".git"].into_iter().collect();
        let tree = build(&[".git/HEAD", "src/.git/config", "src/lib.rs"], &exclusions);
        assert_eq!(visited(&tree), [("src".to_string(), 0), ("src/lib.rs".to_string(), 1)]);
    }

    #[test]
    fn test_exclusion_leaves_existing_nodes_alone() {
        let mut tree = PathTree::new();
        tree.add_path("a/b/c", &ExclusionSet::new());

        let exclusions: ExclusionSet = ["b"].into_iter().collect();
        tree.add_path("a/b/d", &exclusions);
        tree.sort();

        let b = tree.get(&["a", "b"]).expect("existing b is kept");
        let names: Vec<&str> = b.children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["c"]);
    }

    #[test]
    fn test_reinsertion_is_idempotent() {
        let none = ExclusionSet::new();
        let once = build(&["a/b/c"], &none);
        let twice = build(&["a/b/c", "a/b/c"], &none);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 3);
    }

    #[test]
    fn test_sort_is_lexical_by_byte() {
        let tree = build(&["zeta", "alpha", "mid", "Zulu", "_x"], &ExclusionSet::new());
        let names: Vec<&str> = tree.roots().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Zulu", "_x", "alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_sort_is_recursive() {
        let tree = build(&["r/c", "r/a", "r/b/z", "r/b/y"], &ExclusionSet::new());
        let order: Vec<String> = visited(&tree).into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, ["r", "r/a", "r/b", "r/b/y", "r/b/z", "r/c"]);
    }

    #[test]
    fn test_walk_is_preorder_with_depth() {
        let tree = build(
            &["docs/readme.txt", "docs/img/logo.png", "src/main.ext"],
            &ExclusionSet::new(),
        );
        let expected = [
            ("docs", 0),
            ("docs/img", 1),
            ("docs/img/logo.png", 2),
            ("docs/readme.txt", 1),
            ("src", 0),
            ("src/main.ext", 1),
        ];
        let got = visited(&tree);
        assert_eq!(got.len(), expected.len());
        for ((path, depth), (want_path, want_depth)) in got.iter().zip(expected) {
            assert_eq!(path, want_path);
            assert_eq!(*depth, want_depth);
        }
    }

    #[test]
    fn test_walk_reports_leaves() {
        let tree = build(&["a/b"], &ExclusionSet::new());
        let mut leaves = Vec::new();
        tree.walk_depth(|v| {
            leaves.push((v.name.to_string(), v.is_leaf));
            Ok::<_, ()>(())
        })
        .unwrap();
        assert_eq!(leaves, [("a".to_string(), false), ("b".to_string(), true)]);
    }

    #[test]
    fn test_walk_aborts_on_error() {
        let tree = build(&["a/b/c", "a/d", "e"], &ExclusionSet::new());
        let mut seen = Vec::new();
        let result = tree.walk_depth(|v| {
            seen.push(v.name.to_string());
            if seen.len() == 3 { Err("stop") } else { Ok(()) }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(seen, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_paths_contribute_nothing() {
        let tree = build(&["", ".", "/", "  "], &ExclusionSet::new());
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_json_shape() {
        let tree = build(&["a/b", "c"], &ExclusionSet::new());
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "a", "children": [{"name": "b"}]},
                {"name": "c"}
            ])
        );
    }
}

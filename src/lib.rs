//! Pathtree - print the path hierarchy of a directory or archive as an indented tree

pub mod error;
pub mod exclude;
pub mod output;
pub mod source;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result, SourceError};
pub use exclude::ExclusionSet;
pub use output::{OutputConfig, TextRenderer, print_json, write_json};
pub use source::{Format, read_source};
pub use tree::{PathSink, PathTree, TreeBuilder, TreeNode, Visit};

use std::path::Path;

/// Read one input and build its sorted tree.
///
/// `format` overrides the format inferred from the path when given.
pub fn build_tree(path: &Path, format: Option<&str>, exclusions: &ExclusionSet) -> Result<PathTree> {
    let format = Format::select(format, path)?;
    tracing::debug!(input = %path.display(), %format, "reading input");

    let mut builder = TreeBuilder::new(exclusions);
    read_source(format, path, &mut builder)?;
    tracing::debug!(input = %path.display(), paths = builder.added(), "collected paths");
    Ok(builder.finish())
}

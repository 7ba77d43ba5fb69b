//! Directory adapter

use std::path::Path;

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::PathSink;

/// Feed the root and every file and directory below it to `sink`.
///
/// Paths are passed as the walker yields them, i.e. prefixed with `root` as
/// given. Symlinks are listed but not followed, and no ignore files apply.
pub fn read_dir_tree<S: PathSink>(root: &Path, sink: &mut S) -> Result<()> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut count = 0usize;
    for result in walker {
        let entry = result.map_err(|e| Error::source_read(root, e))?;
        sink.add_path(&entry.path().to_string_lossy());
        count += 1;
    }
    debug!(root = %root.display(), entries = count, "walked directory");
    Ok(())
}

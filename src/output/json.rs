//! JSON output formatting

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::tree::PathTree;

/// Write the tree as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(tree: &PathTree, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tree).map_err(|e| Error::Render(e.into()))?;
    writeln!(out).map_err(Error::Render)
}

/// Print the tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &PathTree) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(tree, &mut lock)?;
    lock.flush().map_err(Error::Render)
}

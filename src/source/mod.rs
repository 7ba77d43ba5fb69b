//! Path sources
//!
//! Each adapter enumerates the raw entry paths of one kind of input and feeds
//! them to a [`PathSink`]:
//!
//! - `dir` - recursive filesystem walk
//! - `zipfile` - zip central directory
//! - `gzip` - tarball entries or a single gzip member
//! - `format` - maps format tokens and file extensions to an adapter

mod dir;
mod format;
mod gzip;
mod zipfile;

use std::path::Path;

use crate::error::Result;
use crate::tree::PathSink;

pub use dir::read_dir_tree;
pub use format::Format;
pub use gzip::read_gzip_entries;
pub use zipfile::read_zip_entries;

/// Enumerate `path` with the adapter for `format`.
pub fn read_source<S: PathSink>(format: Format, path: &Path, sink: &mut S) -> Result<()> {
    match format {
        Format::Dir => read_dir_tree(path, sink),
        Format::Zip => read_zip_entries(path, sink),
        Format::Gzip => read_gzip_entries(path, sink),
    }
}

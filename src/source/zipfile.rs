//! Zip archive adapter

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::tree::PathSink;

/// Feed the stored name of every entry in a zip archive to `sink`.
///
/// Only the central directory is read; entries are not decompressed.
pub fn read_zip_entries<S: PathSink>(path: &Path, sink: &mut S) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::source_read(path, e))?;
    let archive = ZipArchive::new(BufReader::new(file)).map_err(|e| Error::source_read(path, e))?;

    for name in archive.file_names() {
        sink.add_path(name);
    }
    debug!(archive = %path.display(), entries = archive.len(), "read zip entries");
    Ok(())
}

//! Gzip adapter
//!
//! A gzip stream either wraps a tar archive (`.tgz`, `.tar.gz`) or a single
//! compressed member. Tarballs list every entry; anything else lists one
//! entry named after the member.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::ops::Range;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::PathSink;

const TAR_BLOCK: usize = 512;
const CHECKSUM_FIELD: Range<usize> = 148..156;

/// Feed the entries of a gzip file to `sink`.
pub fn read_gzip_entries<S: PathSink>(path: &Path, sink: &mut S) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::source_read(path, e))?;
    let mut decoder = GzDecoder::new(BufReader::new(file));

    let mut head = Vec::with_capacity(TAR_BLOCK);
    (&mut decoder)
        .take(TAR_BLOCK as u64)
        .read_to_end(&mut head)
        .map_err(|e| Error::source_read(path, e))?;

    if looks_like_tar(&head) {
        debug!(archive = %path.display(), "reading gzip as tarball");
        let mut archive = Archive::new(Cursor::new(head).chain(decoder));
        let entries = archive.entries().map_err(|e| Error::source_read(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::source_read(path, e))?;
            let name = entry.path().map_err(|e| Error::source_read(path, e))?;
            sink.add_path(&name.to_string_lossy());
        }
    } else {
        let name = member_name(&decoder, path);
        debug!(archive = %path.display(), member = %name, "reading gzip as single member");
        sink.add_path(&name);
    }
    Ok(())
}

/// A first block that is a valid tar header, ustar or v7.
///
/// Every tar header stores the sum of its bytes, with the checksum field
/// itself counted as spaces, as octal text. An all-zero block has no stored
/// value and is not a header.
fn looks_like_tar(head: &[u8]) -> bool {
    let Some(block) = head.get(..TAR_BLOCK) else {
        return false;
    };
    let Some(stored) = stored_checksum(&block[CHECKSUM_FIELD]) else {
        return false;
    };

    let (mut unsigned, mut signed) = (0i64, 0i64);
    for (i, &b) in block.iter().enumerate() {
        let b = if CHECKSUM_FIELD.contains(&i) { b' ' } else { b };
        unsigned += i64::from(b);
        // some old writers summed signed chars
        signed += i64::from(b as i8);
    }
    stored == unsigned || stored == signed
}

fn stored_checksum(field: &[u8]) -> Option<i64> {
    let text = std::str::from_utf8(field).ok()?;
    let digits = text.trim_matches(['\0', ' ']);
    if digits.is_empty() {
        return None;
    }
    i64::from_str_radix(digits, 8).ok()
}

/// Name stored in the gzip header, else the file name without its last extension.
fn member_name<R: Read>(decoder: &GzDecoder<R>, path: &Path) -> String {
    decoder
        .header()
        .and_then(|h| h.filename())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

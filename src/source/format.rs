//! Input format selection

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Which adapter reads an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Dir,
    Zip,
    Gzip,
}

/// Format tokens accepted by `-f` and matched against file extensions.
const FORMAT_TABLE: &[(&str, Format)] = &[
    ("zip", Format::Zip),
    ("apk", Format::Zip),
    ("docx", Format::Zip),
    ("xlsx", Format::Zip),
    ("ppsx", Format::Zip),
    ("pptx", Format::Zip),
    ("thmx", Format::Zip),
    ("pk3", Format::Zip),
    ("pk4", Format::Zip),
    ("usdz", Format::Zip),
    ("xpi", Format::Zip),
    ("mgz", Format::Zip),
    ("smzip", Format::Zip),
    ("gzip", Format::Gzip),
    ("gz", Format::Gzip),
    ("tgz", Format::Gzip),
    ("gnumeric", Format::Gzip),
    ("adz", Format::Gzip),
    ("maf", Format::Gzip),
    ("dir", Format::Dir),
];

impl Format {
    /// Look up a format token. Tokens are case-insensitive.
    pub fn from_token(token: &str) -> Result<Self> {
        let lower = token.trim().to_ascii_lowercase();
        FORMAT_TABLE
            .iter()
            .find(|(t, _)| *t == lower)
            .map(|(_, f)| *f)
            .ok_or_else(|| Error::UnsupportedFormat(token.to_string()))
    }

    /// Infer the format of an input path.
    ///
    /// Existing directories and extensionless paths are read as directories;
    /// anything else is looked up by extension.
    pub fn infer(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Ok(Format::Dir);
        }
        match path.extension().map(|e| e.to_string_lossy()) {
            None => Ok(Format::Dir),
            Some(ext) if ext.trim().is_empty() => Ok(Format::Dir),
            Some(ext) => Self::from_token(&ext),
        }
    }

    /// Use `explicit` when given, otherwise infer from the path.
    pub fn select(explicit: Option<&str>, path: &Path) -> Result<Self> {
        match explicit {
            Some(token) => Self::from_token(token),
            None => Self::infer(path),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Dir => "dir",
            Format::Zip => "zip",
            Format::Gzip => "gzip",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

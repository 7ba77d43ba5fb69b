//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure while listing or printing one input.
#[derive(Debug, Error)]
pub enum Error {
    /// The format token has no adapter.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The adapter could not open or enumerate its source.
    #[error("cannot read '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    /// The output sink rejected a write.
    #[error("error writing output: {0}")]
    Render(#[source] io::Error),
}

impl Error {
    pub fn source_read(path: impl Into<PathBuf>, source: impl Into<SourceError>) -> Self {
        Self::SourceRead {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Underlying cause of [`Error::SourceRead`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Walk(#[from] ignore::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

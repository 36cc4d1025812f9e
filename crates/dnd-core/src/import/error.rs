//! Errors for archive import.

use crate::mapname::MapNameError;
use std::io;
use std::path::PathBuf;
use zip::result::ZipError;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("stat {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    MapName(#[from] MapNameError),
    #[error("open archive {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: ZipError,
    },
    #[error("read entry {index} of {}", archive.display())]
    Entry {
        archive: PathBuf,
        index: usize,
        #[source]
        source: ZipError,
    },
    /// No action rule matches the entry; add one to the action table.
    #[error("unknown file signature {signature:?} for {file:?} in {}", archive.display())]
    UnknownSignature {
        archive: PathBuf,
        file: String,
        signature: String,
    },
    #[error("entry {file:?} in {} has no usable file name", archive.display())]
    BadEntryName { archive: PathBuf, file: String },
    #[error("copy {file:?} to {}", dest.display())]
    Copy {
        file: String,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("remove imported archive {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

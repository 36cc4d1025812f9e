//! Archive import: classify every entry of a zip and copy it into place.
//!
//! Each file entry's lowercase path signature is resolved against the
//! action table. Unknown signatures fail the archive; files copied before the
//! failure stay where they are and the archive is kept for another attempt.

mod error;

pub use error::ImportError;

use crate::mapname::map_name;
use crate::sanitize::printable;
use crate::sig::path_sig;
use crate::table::{Action, Tables};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Result of importing one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Zero-byte archive; treated as handled by an earlier run.
    AlreadyProcessed,
    Imported {
        map_name: String,
        copied: usize,
        skipped: usize,
    },
}

/// Imports one archive into `dest_root`. Does not delete the archive.
pub fn import_archive(
    archive: &Path,
    dest_root: &Path,
    tables: &Tables,
) -> Result<ImportOutcome, ImportError> {
    let meta = fs::metadata(archive).map_err(|source| ImportError::Stat {
        path: archive.to_path_buf(),
        source,
    })?;
    if meta.len() == 0 {
        tracing::warn!(archive = %archive.display(), "SKIP empty archive");
        return Ok(ImportOutcome::AlreadyProcessed);
    }

    let name = map_name(archive, &tables.names)?;
    let span = tracing::info_span!("import", archive = %archive.display(), map_name = %name);
    let _enter = span.enter();

    let file = File::open(archive).map_err(|source| ImportError::Open {
        path: archive.to_path_buf(),
        source: source.into(),
    })?;
    let mut zip = ZipArchive::new(file).map_err(|source| ImportError::Open {
        path: archive.to_path_buf(),
        source,
    })?;

    let mut copied = 0;
    let mut skipped = 0;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|source| ImportError::Entry {
            archive: archive.to_path_buf(),
            index,
            source,
        })?;
        if entry.is_dir() {
            continue;
        }
        let entry_name = entry.name().to_string();
        let sig = path_sig(&entry_name).to_lowercase();

        let template = match tables.actions.resolve(&sig) {
            Some(Action::Skip) => {
                tracing::info!(src = %entry_name, "SKIP");
                skipped += 1;
                continue;
            }
            Some(Action::Copy(template)) => template,
            None => {
                tracing::error!(file = %entry_name, signature = %sig, "unknown file signature");
                return Err(ImportError::UnknownSignature {
                    archive: archive.to_path_buf(),
                    file: entry_name,
                    signature: sig,
                });
            }
        };

        let dest = dest_path(dest_root, &template.render(&name), &entry_name, tables.sanitize_paths)
            .ok_or_else(|| ImportError::BadEntryName {
                archive: archive.to_path_buf(),
                file: entry_name.clone(),
            })?;
        tracing::info!(src = %entry_name, dst = %dest.display(), "COPY");
        copy_entry(&mut entry, &dest).map_err(|source| ImportError::Copy {
            file: entry_name,
            dest,
            source,
        })?;
        copied += 1;
    }

    tracing::info!(copied, skipped, "imported");
    Ok(ImportOutcome::Imported {
        map_name: name,
        copied,
        skipped,
    })
}

/// Imports archives in order, deleting each one once it is fully imported.
/// Stops at the first failure; that archive and the rest are left untouched.
pub fn import_all<P: AsRef<Path>>(
    archives: &[P],
    dest_root: &Path,
    tables: &Tables,
) -> Result<Vec<ImportOutcome>, ImportError> {
    let mut outcomes = Vec::with_capacity(archives.len());
    for archive in archives {
        let archive = archive.as_ref();
        let outcome = import_archive(archive, dest_root, tables)?;
        if matches!(outcome, ImportOutcome::Imported { .. }) {
            fs::remove_file(archive).map_err(|source| ImportError::Remove {
                path: archive.to_path_buf(),
                source,
            })?;
            tracing::debug!(archive = %archive.display(), "removed imported archive");
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// `<dest_root>/<dest_dir>/<basename of entry>`, or `None` if the entry has
/// no usable base name.
fn dest_path(dest_root: &Path, dest_dir: &str, entry_name: &str, sanitize: bool) -> Option<PathBuf> {
    let base = entry_name.rsplit('/').next().unwrap_or(entry_name);
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    let rel = format!("{}/{}", dest_dir, base);
    let rel = if sanitize { printable(&rel) } else { rel };
    Some(dest_root.join(rel))
}

fn copy_entry(src: &mut impl io::Read, dest: &Path) -> io::Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = File::create(dest)?;
    io::copy(src, &mut out)
}

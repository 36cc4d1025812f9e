//! Path and directory shape signatures.
//!
//! A path signature reduces one file path to `<dir>/*.<ext>`; a directory
//! signature is the sorted, deduplicated set of path signatures under a tree,
//! joined with `;`. Both are lookup keys into the tables in [`crate::table`].

use std::collections::BTreeSet;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Separator between path signatures in a directory signature.
pub const SIG_SEPARATOR: &str = ";";

/// Returns the shape signature of a `/`-separated relative path.
///
/// The directory part is `.` for files at the root. The extension is the text
/// after the last `.` of the base name, or the whole base name when it has no
/// dot. Case is preserved.
///
/// # Examples
///
/// - `path_sig("Objects/chest.png")` → `"Objects/*.png"`
/// - `path_sig("map.jpg")` → `"./*.jpg"`
pub fn path_sig(path: &str) -> String {
    let (dir, base) = match path.rsplit_once('/') {
        Some((dir, base)) if !dir.is_empty() => (dir, base),
        Some((_, base)) => (".", base),
        None => (".", path),
    };
    let ext = base.rsplit('.').next().unwrap_or(base);
    format!("{}/*.{}", dir, ext)
}

/// Builds a directory signature from an in-memory set of relative paths.
/// Order and duplicates in `paths` do not affect the result.
pub fn sig_of_paths<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sigs: BTreeSet<String> = paths.into_iter().map(|p| path_sig(p.as_ref())).collect();
    sigs.into_iter().collect::<Vec<_>>().join(SIG_SEPARATOR)
}

/// Walks `root` and returns the signature of every non-hidden file below it.
///
/// Files whose own name starts with `.` are skipped. Hidden directories are
/// still walked, so visible files inside them count. An empty tree yields an
/// empty string.
pub fn dir_sig(root: &Path) -> io::Result<String> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() || is_hidden(&entry) {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        paths.push(slash_path(rel));
    }

    Ok(sig_of_paths(paths))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

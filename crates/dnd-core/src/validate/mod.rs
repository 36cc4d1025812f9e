//! Validates that every map under `<root>/Maps` has a known layout.

mod error;

pub use error::{Mismatch, ValidateError};

use crate::sig::dir_sig;
use crate::table::LayoutTable;
use std::fs;
use std::path::Path;

/// Name of the maps directory under the library root.
pub const MAPS_DIR: &str = "Maps";

/// Per-map results of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// `(map directory, source-pack label)` in name order.
    pub matched: Vec<(String, String)>,
}

/// Validates `<root>/Maps`.
pub fn validate_root(root: &Path, layouts: &LayoutTable) -> Result<ValidationReport, ValidateError> {
    tracing::info!(root = %root.display(), "validating");
    validate_maps(&root.join(MAPS_DIR), layouts)
}

/// Checks every non-hidden subdirectory of `maps_dir` against `layouts`.
///
/// All maps are checked before failing so that one run reports every
/// unrecognized layout.
pub fn validate_maps(maps_dir: &Path, layouts: &LayoutTable) -> Result<ValidationReport, ValidateError> {
    let io_err = |source| ValidateError::Io {
        path: maps_dir.to_path_buf(),
        source,
    };

    let mut maps = Vec::new();
    for entry in fs::read_dir(maps_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.file_type().map_err(io_err)?.is_dir() {
            continue;
        }
        maps.push(name);
    }
    maps.sort();

    let mut report = ValidationReport::default();
    let mut mismatches = Vec::new();
    for map in maps {
        let map_dir = maps_dir.join(&map);
        let signature = dir_sig(&map_dir).map_err(|source| ValidateError::Io {
            path: map_dir.clone(),
            source,
        })?;
        match layouts.lookup(&signature) {
            Some(label) => {
                tracing::info!(map = %map, layout = label, "map ok");
                report.matched.push((map, label.to_string()));
            }
            None => {
                tracing::error!(map = %map, signature = %signature, "unrecognized signature");
                mismatches.push(Mismatch { map, signature });
            }
        }
    }

    if mismatches.is_empty() {
        Ok(report)
    } else {
        Err(ValidateError::Unrecognized(mismatches))
    }
}

//! Errors for map-directory validation.

use std::io;
use std::path::PathBuf;

/// A map directory whose signature is not in the layout table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub map: String,
    pub signature: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}", describe(.0))]
    Unrecognized(Vec<Mismatch>),
}

fn describe(mismatches: &[Mismatch]) -> String {
    let maps: Vec<String> = mismatches
        .iter()
        .map(|m| format!("{:?} ({})", m.map, m.signature))
        .collect();
    format!(
        "{} map(s) with unrecognized signature: {}",
        mismatches.len(),
        maps.join(", ")
    )
}

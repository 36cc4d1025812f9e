//! Canonical map names derived from archive filenames.
//!
//! `"Sunken Temple Gridless High Res.zip"` becomes `"Sunken Temple"`: the
//! name is tokenized, then noise tokens from a stop-word table are trimmed.

mod camel;

pub use camel::split_camel_case;

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

const ARCHIVE_SUFFIX: &str = ".zip";

/// Token trimming rules for map-name derivation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRules {
    /// Noise tokens, compared case-insensitively.
    pub stop_words: BTreeSet<String>,
    /// Also trim stop words from the front of the name.
    #[serde(default)]
    pub trim_leading: bool,
    /// Treat trailing tokens starting with `[` as noise.
    #[serde(default)]
    pub drop_bracketed: bool,
}

impl NameRules {
    /// Rules with the given stop words and both optional trims disabled.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            trim_leading: false,
            drop_bracketed: false,
        }
    }

    /// Lowercases the stop words so lookups stay case-insensitive.
    pub fn normalized(mut self) -> Self {
        self.stop_words = self.stop_words.iter().map(|w| w.to_lowercase()).collect();
        self
    }

    fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    fn is_trailing_noise(&self, token: &str) -> bool {
        self.is_stop_word(token) || (self.drop_bracketed && token.starts_with('['))
    }
}

impl Default for NameRules {
    fn default() -> Self {
        let mut rules = Self::with_stop_words(crate::table::defaults::STOP_WORDS);
        rules.trim_leading = true;
        rules.drop_bracketed = true;
        rules
    }
}

/// Map-name derivation failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapNameError {
    /// Every token of the filename was noise.
    #[error("no map name left in {file:?} after removing stop words")]
    Empty { file: String },
    /// The name is `.` or `..` and cannot be used as a directory.
    #[error("map name from {file:?} is the reserved name {name:?}")]
    Reserved { file: String, name: String },
}

/// Derives the map name for an archive path.
pub fn map_name(archive: &Path, rules: &NameRules) -> Result<String, MapNameError> {
    let file = archive
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = strip_archive_suffix(&file);

    let mut tokens: Vec<String> = stem.split(' ').map(str::to_string).collect();
    if tokens.len() == 1 {
        tokens = split_camel_case(&tokens[0]);
    }

    while tokens.last().is_some_and(|t| rules.is_trailing_noise(t)) {
        tokens.pop();
    }

    let start = if rules.trim_leading {
        tokens
            .iter()
            .position(|t| !rules.is_stop_word(t))
            .unwrap_or(tokens.len())
    } else {
        0
    };
    let tokens = &tokens[start..];

    if tokens.is_empty() {
        return Err(MapNameError::Empty { file });
    }

    let name = tokens.join(" ");
    if name == "." || name == ".." {
        return Err(MapNameError::Reserved { file, name });
    }
    Ok(name)
}

fn strip_archive_suffix(file: &str) -> &str {
    let cut = file.len().saturating_sub(ARCHIVE_SUFFIX.len());
    match file.get(cut..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(ARCHIVE_SUFFIX) => &file[..cut],
        _ => file,
    }
}

#[cfg(test)]
mod tests;

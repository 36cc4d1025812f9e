//! Known map-directory layouts keyed by directory signature.

use std::collections::BTreeMap;

/// Directory signature → source-pack label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutTable(BTreeMap<String, String>);

impl LayoutTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    /// Returns the source-pack label for an exact directory signature.
    pub fn lookup(&self, dir_sig: &str) -> Option<&str> {
        self.0.get(dir_sig).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LayoutTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

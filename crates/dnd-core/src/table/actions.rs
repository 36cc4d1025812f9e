//! Per-file action rules: where a file with a given signature goes.

use globset::{GlobBuilder, GlobMatcher};
use serde::Deserialize;
use std::collections::HashMap;

/// Destination sentinel meaning "discard this file".
pub const SKIP_SENTINEL: &str = "{SKIP}";

/// Placeholder substituted with the derived map name.
pub const MAPNAME_PLACEHOLDER: &str = "{MAPNAME}";

/// Destination directory template, relative to the import root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestTemplate(String);

impl DestTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitutes every `{MAPNAME}` with `map_name`.
    pub fn render(&self, map_name: &str) -> String {
        self.0.replace(MAPNAME_PLACEHOLDER, map_name)
    }
}

/// What to do with a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Copy into the rendered destination directory.
    Copy(DestTemplate),
    /// Discard.
    Skip,
}

impl Action {
    /// Parses a destination string; `{SKIP}` is the discard sentinel.
    pub fn parse(dest: &str) -> Self {
        if dest == SKIP_SENTINEL {
            Action::Skip
        } else {
            Action::Copy(DestTemplate::new(dest))
        }
    }
}

/// One `pattern → destination` rule as written in config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionRule {
    pub pattern: String,
    pub dest: String,
}

impl ActionRule {
    pub fn new(pattern: &str, dest: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            dest: dest.to_string(),
        }
    }
}

/// Ordered lookup table from lowercase file signature to [`Action`].
///
/// Patterns without `**` are literal keys, matched either exactly or, when
/// they start with `*/`, against the signature with its first directory
/// segment replaced by `*`. Patterns containing `**` are globs where `*`
/// stays within one path segment, tried in table order.
///
/// Lookup order: exact literal, `{SKIP}` globs, `*/` literal, copy globs.
/// A broad `*/*.jpg` copy rule therefore never overrides a skip rule such as
/// `__macosx/**` or `**/roll20/**`.
#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    literal: HashMap<String, Action>,
    globs: Vec<(GlobMatcher, Action)>,
}

impl ActionTable {
    /// Builds the table; patterns are lowercased. The first rule for a
    /// given literal pattern wins.
    pub fn from_rules<'a, I>(rules: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = &'a ActionRule>,
    {
        let mut table = Self::default();
        for rule in rules {
            let pattern = rule.pattern.to_lowercase();
            let action = Action::parse(&rule.dest);
            if pattern.contains("**") {
                let glob = GlobBuilder::new(&pattern)
                    .literal_separator(true)
                    .build()?
                    .compile_matcher();
                table.globs.push((glob, action));
            } else {
                table.literal.entry(pattern).or_insert(action);
            }
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.literal.len() + self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the action for a lowercase file signature.
    pub fn resolve(&self, sig: &str) -> Option<&Action> {
        if let Some(action) = self.literal.get(sig) {
            return Some(action);
        }
        if let Some(action) = self.find_glob(sig, true) {
            return Some(action);
        }
        if let Some(wild) = wildcard_prefix(sig) {
            if let Some(action) = self.literal.get(&wild) {
                return Some(action);
            }
        }
        self.find_glob(sig, false)
    }

    fn find_glob(&self, sig: &str, skip: bool) -> Option<&Action> {
        self.globs
            .iter()
            .filter(|(_, action)| (*action == Action::Skip) == skip)
            .find(|(glob, _)| glob.is_match(sig))
            .map(|(_, action)| action)
    }
}

/// Replaces the first directory segment of a signature with `*`.
/// Returns `None` for root-level signatures (`./*.ext`).
fn wildcard_prefix(sig: &str) -> Option<String> {
    let (first, rest) = sig.split_once('/')?;
    if first == "." {
        return None;
    }
    Some(format!("*/{}", rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rules: &[(&str, &str)]) -> ActionTable {
        let rules: Vec<ActionRule> = rules.iter().map(|(p, d)| ActionRule::new(p, d)).collect();
        ActionTable::from_rules(&rules).unwrap()
    }

    fn copy(dest: &str) -> Action {
        Action::Copy(DestTemplate::new(dest))
    }

    #[test]
    fn exact_match_first() {
        let t = table(&[("gridless/*.jpg", "Maps/{MAPNAME}")]);
        assert_eq!(t.resolve("gridless/*.jpg"), Some(&copy("Maps/{MAPNAME}")));
        assert_eq!(t.resolve("pack/gridless/*.jpg"), None);
    }

    #[test]
    fn wildcard_prefix_fallback() {
        let t = table(&[
            ("*/Gridless/*.jpg", "Maps/{MAPNAME}"),
            ("*/Roll20/Grid/*.jpg", "{SKIP}"),
        ]);
        assert_eq!(t.resolve("pack/gridless/*.jpg"), Some(&copy("Maps/{MAPNAME}")));
        assert_eq!(t.resolve("pack/roll20/grid/*.jpg"), Some(&Action::Skip));
        assert_eq!(t.resolve("a/b/gridless/*.jpg"), None);
    }

    #[test]
    fn wildcard_prefix_needs_a_directory() {
        let t = table(&[("*/*.jpg", "Maps/{MAPNAME}")]);
        assert_eq!(t.resolve("pack/*.jpg"), Some(&copy("Maps/{MAPNAME}")));
        assert_eq!(t.resolve("./*.jpg"), None);
    }

    #[test]
    fn globs_in_order_after_literals() {
        let t = table(&[
            ("**/roll20/**", "{SKIP}"),
            ("**/tokens/*.png", "Maps/{MAPNAME}/Objects"),
            ("*/tokens/*.png", "Creatures"),
        ]);
        assert_eq!(t.resolve("pack/tokens/*.png"), Some(&copy("Creatures")));
        assert_eq!(
            t.resolve("pack/extra/tokens/*.png"),
            Some(&copy("Maps/{MAPNAME}/Objects"))
        );
        assert_eq!(t.resolve("pack/roll20/tokens/*.png"), Some(&Action::Skip));
    }

    #[test]
    fn skip_globs_beat_wildcard_prefix_copies() {
        let t = table(&[
            ("*/*.jpg", "Maps/{MAPNAME}"),
            ("__macosx/**", "{SKIP}"),
            ("**/roll20/**", "{SKIP}"),
            ("**/tokens/*.jpg", "Maps/{MAPNAME}/Objects"),
        ]);
        assert_eq!(t.resolve("__macosx/*.jpg"), Some(&Action::Skip));
        assert_eq!(t.resolve("roll20/*.jpg"), Some(&Action::Skip));
        assert_eq!(t.resolve("pack/*.jpg"), Some(&copy("Maps/{MAPNAME}")));
        assert_eq!(t.resolve("tokens/*.jpg"), Some(&copy("Maps/{MAPNAME}")));
    }

    #[test]
    fn glob_star_stays_in_segment() {
        let t = table(&[("**/gridless/*.jpg", "Maps/{MAPNAME}")]);
        assert!(t.resolve("gridless/*.jpg").is_some());
        assert!(t.resolve("x/y/gridless/*.jpg").is_some());
        assert!(t.resolve("x/gridless/floor 1/*.jpg").is_none());
    }

    #[test]
    fn render_substitutes_every_placeholder() {
        let t = DestTemplate::new("Maps/{MAPNAME}/Objects/{MAPNAME}");
        assert_eq!(t.render("Foo"), "Maps/Foo/Objects/Foo");
        assert_eq!(DestTemplate::new("Creatures").render("Foo"), "Creatures");
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let rules = vec![ActionRule::new("**/[unclosed/*.jpg", "{SKIP}")];
        assert!(ActionTable::from_rules(&rules).is_err());
    }
}

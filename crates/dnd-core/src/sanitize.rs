//! Printable-only destination paths.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Keeps letters, marks, numbers, punctuation, symbols and the plain space.
/// Everything else is dropped: control and format characters (zero-width
/// and bidi marks, BOM), private-use and unassigned code points, and every
/// separator other than U+0020.
pub fn printable(s: &str) -> String {
    s.chars().filter(|&c| is_printable(c)).collect()
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

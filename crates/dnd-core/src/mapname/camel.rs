//! Camel-case segmentation for archive names without spaces.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

fn class_of(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Splits `s` at character-class boundaries.
///
/// Runs of lowercase, uppercase, digit and other characters become separate
/// tokens. An uppercase run directly followed by a lowercase run gives its
/// last letter to the lowercase run, so `"HTMLMap"` splits as `["HTML", "Map"]`.
pub fn split_camel_case(s: &str) -> Vec<String> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    let mut last_class = None;
    for c in s.chars() {
        let class = class_of(c);
        match runs.last_mut() {
            Some(run) if last_class == Some(class) => run.push(c),
            _ => runs.push(vec![c]),
        }
        last_class = Some(class);
    }

    for i in 0..runs.len().saturating_sub(1) {
        let upper_then_lower = runs[i].first().map(|&c| class_of(c)) == Some(CharClass::Upper)
            && runs[i + 1].first().map(|&c| class_of(c)) == Some(CharClass::Lower);
        if upper_then_lower {
            if let Some(c) = runs[i].pop() {
                runs[i + 1].insert(0, c);
            }
        }
    }

    runs.into_iter()
        .filter(|run| !run.is_empty())
        .map(|run| run.into_iter().collect())
        .collect()
}

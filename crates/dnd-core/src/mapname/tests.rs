//! Tests for map-name derivation.

use super::*;
use std::path::PathBuf;

fn rules(words: &[&str]) -> NameRules {
    NameRules::with_stop_words(words)
}

fn name(path: &str, rules: &NameRules) -> Result<String, MapNameError> {
    map_name(&PathBuf::from(path), rules)
}

#[test]
fn trims_trailing_stop_words() {
    let r = rules(&["high", "res", "gridless", "tokens"]);
    assert_eq!(
        name("Some Map High Res Gridless Tokens.zip", &r).unwrap(),
        "Some Map"
    );
}

#[test]
fn ignores_directories_and_suffix_case() {
    let r = rules(&["gridless"]);
    assert_eq!(
        name("/home/me/Downloads/Goblin Cave Gridless.ZIP", &r).unwrap(),
        "Goblin Cave"
    );
}

#[test]
fn single_token_is_camel_case_split() {
    let r = rules(&[]);
    assert_eq!(name("SomeMapName.zip", &r).unwrap(), "Some Map Name");
}

#[test]
fn camel_case_tokens_are_trimmed() {
    let r = rules(&["gridless", "2"]);
    assert_eq!(name("HauntedMill2Gridless.zip", &r).unwrap(), "Haunted Mill");
}

#[test]
fn stop_words_inside_the_name_are_kept() {
    let r = rules(&["tokens"]);
    assert_eq!(
        name("Tokens of the Deep Tokens.zip", &r).unwrap(),
        "Tokens of the Deep"
    );
}

#[test]
fn leading_trim_only_when_enabled() {
    let mut r = rules(&["$5", "rewards"]);
    assert_eq!(name("$5 Rewards Old Bridge.zip", &r).unwrap(), "$5 Rewards Old Bridge");
    r.trim_leading = true;
    assert_eq!(name("$5 Rewards Old Bridge.zip", &r).unwrap(), "Old Bridge");
}

#[test]
fn bracketed_tail_only_when_enabled() {
    let mut r = rules(&[]);
    assert_eq!(name("Old Bridge [40x30].zip", &r).unwrap(), "Old Bridge [40x30]");
    r.drop_bracketed = true;
    assert_eq!(name("Old Bridge [40x30].zip", &r).unwrap(), "Old Bridge");
}

#[test]
fn trailing_space_tokens_are_trimmed_with_empty_stop_word() {
    let r = rules(&["", "-", "gridless"]);
    assert_eq!(name("Ruined Keep - Gridless .zip", &r).unwrap(), "Ruined Keep");
}

#[test]
fn all_noise_is_an_error() {
    let r = rules(&["gridless", "tokens"]);
    assert_eq!(
        name("Gridless Tokens.zip", &r),
        Err(MapNameError::Empty {
            file: "Gridless Tokens.zip".to_string()
        })
    );
}

#[test]
fn default_rules_cover_common_noise() {
    let r = NameRules::default();
    assert_eq!(
        name("Dragon Lair (Gridless) Pt.2.zip", &r).unwrap(),
        "Dragon Lair"
    );
    assert_eq!(name("Diamond Frozen Lake Roll20+Tokens.zip", &r).unwrap(), "Frozen Lake");
}

#[test]
fn dot_names_are_rejected() {
    let r = rules(&[]);
    assert_eq!(
        name("...zip", &r),
        Err(MapNameError::Reserved {
            file: "...zip".to_string(),
            name: "..".to_string(),
        })
    );
    assert!(matches!(name("..zip", &r), Err(MapNameError::Reserved { .. })));
    assert_eq!(name("...Cave.zip", &r).unwrap(), "... Cave");
}

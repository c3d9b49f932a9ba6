#![cfg(test)]

use super::*;

#[test]
fn test_pad_right() {
    assert_eq!(pad_right("ab", 5), "ab   ");
    assert_eq!(pad_right("", 2), "  ");
    assert_eq!(pad_right("abcdef", 3), "abcdef", "Padding should never truncate.");
    assert_eq!(
        pad_right("né", 3),
        "né ",
        "Width should be counted in characters, not bytes."
    );
}

#[test]
fn test_wrap() {
    assert_eq!(
        wrap("the quick brown fox jumps", 10),
        vec!["the quick", "brown fox", "jumps"]
    );
    assert_eq!(wrap("  spaced   out  ", 80), vec!["spaced out"]);
    assert_eq!(
        wrap("a incomprehensibilities b", 5),
        vec!["a", "incomprehensibilities", "b"],
        "Long words should get their own line."
    );
    assert_eq!(wrap("exactly ten", 11), vec!["exactly ten"]);
}

#[test]
fn test_wrap_edge_cases() {
    assert!(wrap("", 10).is_empty());
    assert!(wrap(" \t\n ", 10).is_empty(), "Blank text should produce no lines.");
    assert_eq!(wrap("a b", 0), vec!["a", "b"], "A width of 0 should behave like 1.");
}

//! Tokenizer tests.

use trolley_parser::tokenizer::tokenize;

#[test]
fn tokenize_simple_command() {
    assert_eq!(tokenize("take tomatoes"), ["take", "tomatoes"]);
}

#[test]
fn tokenize_lowercases() {
    assert_eq!(tokenize("EXAMINE Small Cart"), ["examine", "small", "cart"]);
}

#[test]
fn tokenize_collapses_tabs_and_newlines() {
    assert_eq!(tokenize("go\tto\n produce   aisle"), ["go", "to", "produce", "aisle"]);
}

#[test]
fn tokenize_blank_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t ").is_empty());
}

#[test]
fn tokenize_keeps_punctuation() {
    assert_eq!(tokenize("take apples!"), ["take", "apples!"]);
}

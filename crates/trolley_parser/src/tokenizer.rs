//! Input tokenization.
//!
//! Converts raw player input into lowercase words.

/// Tokenizes a raw input string into words.
///
/// - Converts words to lowercase
/// - Splits on any run of whitespace
/// - Leading and trailing whitespace produce no tokens
///
/// Punctuation is kept; "apples," and "apples" are different words.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

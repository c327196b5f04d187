//! The `action target` command grammar.

use std::fmt;

use crate::tokenizer::tokenize;

/// A normalized `(action, target)` pair.
///
/// Both halves are lowercase with single spaces between words. Either may
/// be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// The verb, or `"go to"` for movement.
    pub action: String,
    /// Everything after the verb.
    pub target: String,
}

impl Command {
    /// Creates a command from already-normalized parts.
    #[must_use]
    pub fn new(action: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            target: target.into(),
        }
    }

    /// Returns true if the input was blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action.is_empty() && self.target.is_empty()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.target.is_empty() {
            write!(f, "{}", self.action)
        } else {
            write!(f, "{} {}", self.action, self.target)
        }
    }
}

/// Parses raw input into a command.
///
/// The first word is the action and the rest is the target. `go` is special:
/// both `go to X` and `go X` become the action `"go to"` with target `X`.
/// Nothing is validated here.
#[must_use]
pub fn parse(input: &str) -> Command {
    let words = tokenize(input);
    let Some((first, rest)) = words.split_first() else {
        return Command::default();
    };

    if first == "go" {
        let rest = match rest.split_first() {
            Some((to, after)) if to == "to" => after,
            _ => rest,
        };
        return Command::new("go to", rest.join(" "));
    }

    Command::new(first.clone(), rest.join(" "))
}

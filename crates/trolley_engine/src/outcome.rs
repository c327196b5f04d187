//! What a command produced.

use std::fmt;

/// How a shopping trip ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// Left with a receipt.
    Checkout,
    /// Left without paying.
    Walkout,
}

impl Ending {
    /// Process exit code the host should use.
    ///
    /// Both endings finish the trip normally and exit 0; use
    /// [`Ending::is_success`] to tell them apart.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Checkout | Self::Walkout => 0,
        }
    }

    /// Returns true for a paid-up exit.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Checkout)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkout => write!(f, "checkout"),
            Self::Walkout => write!(f, "walkout"),
        }
    }
}

/// Whether the session goes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Read another command.
    Continue,
    /// The trip is over.
    Terminate(Ending),
}

/// The result of dispatching one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Lines to show the player, in order.
    pub messages: Vec<String>,
    /// Whether to keep going.
    pub outcome: Outcome,
}

impl Turn {
    /// A turn that keeps the session going.
    #[must_use]
    pub fn proceed(messages: Vec<String>) -> Self {
        Self {
            messages,
            outcome: Outcome::Continue,
        }
    }

    /// A turn that ends the session.
    #[must_use]
    pub fn terminate(messages: Vec<String>, ending: Ending) -> Self {
        Self {
            messages,
            outcome: Outcome::Terminate(ending),
        }
    }

    /// The ending, if this turn ended the session.
    #[must_use]
    pub const fn ending(&self) -> Option<Ending> {
        match self.outcome {
            Outcome::Terminate(ending) => Some(ending),
            Outcome::Continue => None,
        }
    }

    /// All messages joined into one block of text.
    #[must_use]
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

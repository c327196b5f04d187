//! Error types for the Trolley system.
//!
//! Uses `thiserror` for ergonomic error definition. Errors come in two
//! families: recoverable ones (unknown names, refused commands) that the
//! dispatcher turns into player messages, and fatal ones (broken invariants,
//! bad configuration, terminal failures) that end the session.

use std::fmt;

use thiserror::Error;

/// The main error type for Trolley operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownItem(name.into()))
    }

    /// Creates an unknown location error.
    #[must_use]
    pub fn unknown_location(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocation(name.into()))
    }

    /// Creates a refused-command error.
    #[must_use]
    pub fn refused(refusal: Refusal) -> Self {
        Self::new(ErrorKind::Refused(refusal))
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation(detail.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(detail.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(detail.into()))
    }

    /// Returns true for unknown item and location names.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownItem(_) | ErrorKind::UnknownLocation(_)
        )
    }

    /// Returns true if the session can carry on after this error.
    ///
    /// Lookup failures and refusals are reported to the player; everything
    /// else ends the session.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.is_not_found() || matches!(self.kind, ErrorKind::Refused(_))
    }

    /// Returns the refusal carried by this error, if any.
    #[must_use]
    pub fn refusal(&self) -> Option<&Refusal> {
        match &self.kind {
            ErrorKind::Refused(refusal) => Some(refusal),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No item answers to this name.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// No location answers to this name.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// A command's precondition did not hold.
    #[error("{0}")]
    Refused(Refusal),

    /// Internal bookkeeping disagrees with itself. Always a bug.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Seed data or configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading from or writing to the terminal failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Why a well-formed command was turned down.
///
/// The `Display` text of each variant is what the player sees.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Refusal {
    /// The item exists but is somewhere else.
    #[error("There is no {item} here.")]
    NotHere {
        /// Canonical item name.
        item: String,
    },

    /// The item cannot be picked up; echoes its description.
    #[error("You can't take the {item}. {description}")]
    NotTakeable {
        /// Canonical item name.
        item: String,
        /// The item's description.
        description: String,
    },

    /// Produce can only be collected into a cart.
    #[error("You need to get a cart first.")]
    NeedCart,

    /// The player has no shopping list yet.
    #[error("You need to pick up a shopping list first.")]
    NeedList,

    /// The produce is not stocked at the current location.
    #[error("You don't see any {produce} around here.")]
    ProduceNotHere {
        /// Produce name.
        produce: String,
    },

    /// The item is takeable but there is nothing to do with it.
    #[error("You pick up the {item}, think better of it, and put it back.")]
    NoUse {
        /// Canonical item name.
        item: String,
    },

    /// Checkout found a shopping-list entry absent from the cart.
    #[error("The cashier checks your list against your cart. You still need {produce}.")]
    MissingFromCart {
        /// The first missing produce name.
        produce: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The raw command being executed.
    pub command: Option<String>,
    /// The player's location at the time.
    pub location: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(command) = &self.command {
            write!(f, "while running `{command}`")?;
        }
        if let Some(location) = &self.location {
            if self.command.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at {location}")?;
        }
        Ok(())
    }
}

/// Result type alias using Trolley's Error.
pub type Result<T> = std::result::Result<T, Error>;

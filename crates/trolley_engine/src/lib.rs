//! Game engine for Trolley.
//!
//! This crate provides:
//! - [`Player`] - The shopper's progress: location, cart, list, receipt
//! - [`GameState`] - Catalog plus player, threaded through every command
//! - [`Dispatcher`] - Resolves a parsed command against the state
//! - [`checkout`] - Shopping list verification at the register
//!
//! One command runs to completion before the next is read. The dispatcher
//! turns unknown names and failed preconditions into messages; only a broken
//! invariant comes back as an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checkout;
pub mod dispatch;
pub mod outcome;
pub mod player;
pub mod state;

pub use dispatch::Dispatcher;
pub use outcome::{Ending, Outcome, Turn};
pub use player::Player;
pub use state::{DEFAULT_LIST_LENGTH, GameOptions, GameState};

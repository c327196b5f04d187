//! Command parser for the Trolley shopping adventure.
//!
//! This crate turns player input like "go to produce aisle" or "take cart"
//! into an `(action, target)` pair the engine can dispatch.
//!
//! # Architecture
//!
//! ```text
//! "Go to the  Produce Aisle"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["go", "to", "the", "produce", "aisle"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command { action: "go to", target: "the produce aisle" }
//! │ PARSER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Some(Action::GoTo)
//! │ LOOKUP          │
//! └─────────────────┘
//! ```
//!
//! The parser never rejects input. Unknown actions are reported by the
//! engine, which owns the vocabulary lookup.
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`command`] - The two-token `action target` grammar
//! - [`vocabulary`] - Recognized verbs and their aliases

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod tokenizer;
pub mod vocabulary;

pub use command::{Command, parse};
pub use vocabulary::{Action, ActionSet, INVENTORY_KEYWORD};

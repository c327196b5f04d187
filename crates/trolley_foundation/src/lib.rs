//! Core types shared by every Trolley layer.
//!
//! This crate provides:
//! - [`Error`] - Error type separating recoverable refusals from fatal faults
//! - [`Refusal`] - The player-facing reasons a command did not go through
//! - [`NameTable`] - Synonym resolution to canonical names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;

pub use error::{Error, ErrorContext, ErrorKind, Refusal, Result};
pub use name::{NameTable, normalize};

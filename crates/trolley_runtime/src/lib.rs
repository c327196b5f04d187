//! REPL, CLI, and configuration for Trolley.
//!
//! This crate provides:
//! - [`Repl`] - The interactive prompt-and-read loop
//! - [`Session`] - Game state and dispatcher for one shopping trip
//! - [`GameConfig`] - TOML configuration
//! - [`LineEditor`] - Swappable line input, backed by rustyline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use config::GameConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;

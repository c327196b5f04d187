//! Trolley - a text adventure about a trip to the grocery store
//!
//! This crate re-exports all layers of the Trolley system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: trolley_runtime    - REPL, CLI, configuration
//! Layer 3: trolley_engine     - Player state, dispatch, checkout
//! Layer 2: trolley_parser     - Tokenizer, commands, verbs
//! Layer 1: trolley_world      - Items, locations, produce, store layout
//! Layer 0: trolley_foundation - Errors and name normalization
//! ```

pub use trolley_engine as engine;
pub use trolley_foundation as foundation;
pub use trolley_parser as parser;
pub use trolley_runtime as runtime;
pub use trolley_world as world;

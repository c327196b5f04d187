//! Item and location registries for Trolley.
//!
//! This crate provides:
//! - [`Item`] and [`ItemRegistry`] - Things in the store, including containers
//! - [`Location`] and [`LocationRegistry`] - The store layout and its exits
//! - [`ProduceInventory`] - Produce names, which have no item of their own
//! - [`SeedData`] and [`Catalog`] - Validated world construction
//! - [`stock`] - The built-in store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod item;
pub mod location;
pub mod produce;
pub mod seed;
pub mod stock;

pub use catalog::Catalog;
pub use item::{Item, ItemRegistry, ItemRole};
pub use location::{Location, LocationRegistry};
pub use produce::ProduceInventory;
pub use seed::{ItemSeed, LocationSeed, SeedData};

//! Seed data: the raw description of a store, before validation.
//!
//! Seed files are TOML:
//!
//! ```toml
//! start = "main entrance"
//! produce = ["apples", "tomatoes"]
//!
//! [[items]]
//! name = "small cart"
//! synonyms = ["cart"]
//! description = "A cart with one wobbly wheel."
//! takeable = true
//! role = "cart"
//!
//! [[locations]]
//! name = "main entrance"
//! description = "Automatic doors hiss open."
//! items = ["small cart"]
//! exits = ["produce aisle"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use trolley_foundation::{Error, Result};

use crate::item::ItemRole;

/// An item definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSeed {
    /// Canonical name.
    pub name: String,
    /// Other names the player may use.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Text shown by `examine`.
    pub description: String,
    /// Whether `take` may move it to the player.
    #[serde(default)]
    pub takeable: bool,
    /// Special behavior, if any.
    #[serde(default)]
    pub role: ItemRole,
}

/// A location definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSeed {
    /// Canonical name.
    pub name: String,
    /// Other names the player may use.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Text shown by `look`.
    pub description: String,
    /// Items and produce found here.
    #[serde(default)]
    pub items: Vec<String>,
    /// Locations reachable in one move. Not necessarily symmetric.
    #[serde(default)]
    pub exits: Vec<String>,
}

/// A complete store description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    /// Where the player starts.
    pub start: String,
    /// Every produce name the store sells.
    pub produce: Vec<String>,
    /// Item definitions.
    #[serde(default)]
    pub items: Vec<ItemSeed>,
    /// Location definitions.
    pub locations: Vec<LocationSeed>,
}

impl SeedData {
    /// Parses seed data from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is malformed.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::config(format!("invalid seed data: {e}")))
    }

    /// Reads seed data from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&source)
    }
}

//! Configuration for a Trolley session.
//!
//! Loaded from TOML; every field is optional:
//!
//! ```toml
//! list_length = 5
//! rng_seed = 42
//! prompt = "> "
//! show_banner = true
//! history_size = 500
//! world = "stores/corner-shop.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trolley_engine::DEFAULT_LIST_LENGTH;
use trolley_foundation::{Error, Result};

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// How many produce names go on the shopping list.
    pub list_length: usize,
    /// Fixed seed for the shopping list draw; random if unset.
    pub rng_seed: Option<u64>,
    /// Primary prompt.
    pub prompt: String,
    /// Whether to show the welcome banner.
    pub show_banner: bool,
    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,
    /// Seed file replacing the built-in store.
    pub world: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            list_length: DEFAULT_LIST_LENGTH,
            rng_seed: None,
            prompt: "> ".to_string(),
            show_banner: true,
            history_size: 500,
            world: None,
        }
    }
}

impl GameConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is invalid.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::config(format!("invalid config: {e}")))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Builder method to fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Builder method to set the world file.
    #[must_use]
    pub fn with_world(mut self, world: impl Into<PathBuf>) -> Self {
        self.world = Some(world.into());
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }
}

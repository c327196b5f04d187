//! Session state for one shopping trip.
//!
//! The session owns the [`GameState`] and the [`Dispatcher`] and is the only
//! thing the REPL talks to.

use tracing::info;
use trolley_engine::{Dispatcher, GameOptions, GameState, Turn};
use trolley_foundation::Result;
use trolley_world::{Catalog, SeedData};

use crate::config::GameConfig;

/// One player's trip through the store.
pub struct Session {
    state: GameState,
    dispatcher: Dispatcher,
    seed: u64,
}

impl Session {
    /// Creates a session from configuration.
    ///
    /// Uses the configured world file if there is one, the built-in store
    /// otherwise. Without a configured seed a random one is drawn and logged.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the world file or list length is
    /// unusable.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let catalog = match &config.world {
            Some(path) => {
                info!(path = %path.display(), "loading world");
                Catalog::from_seed(&SeedData::from_file(path)?)?
            }
            None => Catalog::default_store()?,
        };

        let seed = config.rng_seed.unwrap_or_else(rand::random);
        let options = GameOptions::default()
            .with_list_length(config.list_length)
            .with_seed(seed);
        let state = GameState::new(catalog, &options)?;
        Ok(Self::with_state(state, seed))
    }

    /// Creates a session around existing state.
    #[must_use]
    pub fn with_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            dispatcher: Dispatcher::new(),
            seed,
        }
    }

    /// Returns a reference to the game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The seed the shopping list was drawn with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The text shown before the first command.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the player is nowhere.
    pub fn opening(&self) -> Result<String> {
        Dispatcher::opening(&self.state)
    }

    /// Runs one line of player input.
    ///
    /// # Errors
    ///
    /// Returns an error only for broken invariants.
    pub fn handle(&mut self, line: &str) -> Result<Turn> {
        self.dispatcher.run_line(&mut self.state, line)
    }

    /// Words worth offering for tab completion: verbs plus every spelling of
    /// every location, item, and produce name.
    #[must_use]
    pub fn completion_words(&self) -> Vec<String> {
        let catalog = self.state.catalog();
        let mut words: Vec<String> = self
            .state
            .player()
            .actions
            .verbs()
            .into_iter()
            .chain(catalog.locations().names().spellings())
            .chain(catalog.items().names().spellings())
            .chain(catalog.produce().names().iter().map(String::as_str))
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }
}

//! Session state: the catalog and the player, owned together.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use trolley_foundation::{Error, Result};
use trolley_parser::ActionSet;
use trolley_world::{Catalog, Item, ItemRole, Location};

use crate::outcome::Ending;
use crate::player::Player;

/// Number of produce names on a shopping list.
pub const DEFAULT_LIST_LENGTH: usize = 5;

/// Knobs for starting a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// How many produce names go on the shopping list.
    pub list_length: usize,
    /// Seed for the shopping list draw.
    pub rng_seed: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            list_length: DEFAULT_LIST_LENGTH,
            rng_seed: 0,
        }
    }
}

impl GameOptions {
    /// Builder method to set the list length.
    #[must_use]
    pub fn with_list_length(mut self, list_length: usize) -> Self {
        self.list_length = list_length;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }
}

/// Everything that changes during a shopping trip.
#[derive(Clone, Debug)]
pub struct GameState {
    catalog: Catalog,
    player: Player,
    ending: Option<Ending>,
}

impl GameState {
    /// Starts a game: writes the shopping list and puts the player at the
    /// start location.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the store sells fewer produce names
    /// than the list needs.
    pub fn new(mut catalog: Catalog, options: &GameOptions) -> Result<Self> {
        let available = catalog.produce().len();
        if available < options.list_length {
            return Err(Error::config(format!(
                "shopping list needs {} produce names but the store sells {available}",
                options.list_length
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(options.rng_seed);
        let wanted: Vec<String> = catalog
            .produce()
            .names()
            .choose_multiple(&mut rng, options.list_length)
            .cloned()
            .collect();

        let list = catalog.role_item(ItemRole::ShoppingList)?.to_string();
        catalog.items_mut().get_mut(&list)?.fill(wanted);

        info!(
            seed = options.rng_seed,
            list = ?catalog.items().get(&list)?.contents(),
            start = catalog.start(),
            "shopping trip started"
        );

        let player = Player::new(catalog.start(), ActionSet::standard());
        Ok(Self {
            catalog,
            player,
            ending: None,
        })
    }

    /// The catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The catalog, mutably.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// How the trip ended, once it has.
    #[must_use]
    pub const fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub(crate) fn end(&mut self, ending: Ending) {
        self.ending = Some(ending);
    }

    /// The player's current location.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the player stands somewhere the
    /// catalog does not know.
    pub fn current_location(&self) -> Result<&Location> {
        self.catalog
            .locations()
            .get(&self.player.current_location)
            .map_err(|_| {
                Error::invariant(format!(
                    "player is at unknown location \"{}\"",
                    self.player.current_location
                ))
            })
    }

    /// The cart, if the player holds it.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the held name is not in the catalog.
    pub fn cart(&self) -> Result<Option<&Item>> {
        self.held(self.player.cart.as_deref())
    }

    /// The shopping list, if the player holds it.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the held name is not in the catalog.
    pub fn shopping_list(&self) -> Result<Option<&Item>> {
        self.held(self.player.shopping_list.as_deref())
    }

    fn held(&self, name: Option<&str>) -> Result<Option<&Item>> {
        name.map(|name| {
            self.catalog
                .items()
                .get(name)
                .map_err(|_| Error::invariant(format!("player holds unknown item \"{name}\"")))
        })
        .transpose()
    }

    /// Returns true if the item can be interacted with at `location`.
    ///
    /// An item counts as present if the location lists it, or if it is the
    /// cart or shopping list and the player is holding it.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either name does not resolve.
    pub fn is_item_present_at(&self, location: &str, item: &str) -> Result<bool> {
        let location = self.catalog.locations().get(location)?;
        let item = self.catalog.items().get(item)?;

        if location.has_item(item.name()) {
            return Ok(true);
        }
        Ok(match item.role() {
            ItemRole::Cart => self.player.has_cart(),
            ItemRole::ShoppingList => self.player.has_list(),
            ItemRole::Register | ItemRole::Generic => false,
        })
    }
}

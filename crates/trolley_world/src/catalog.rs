//! The validated world: items, locations, and produce.
//!
//! [`Catalog::from_seed`] is the only way in. It checks every cross
//! reference in the seed so the engine never meets a dangling name.

use std::collections::HashMap;

use tracing::debug;
use trolley_foundation::{Error, Result, normalize};

use crate::item::{Item, ItemRegistry, ItemRole};
use crate::location::{Location, LocationRegistry};
use crate::produce::ProduceInventory;
use crate::seed::SeedData;
use crate::stock;

/// Items, locations, and produce for one session.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: ItemRegistry,
    locations: LocationRegistry,
    produce: ProduceInventory,
    start: String,
}

impl Catalog {
    /// Builds and validates a catalog.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if names collide, a reference dangles,
    /// an item is placed twice, or the store lacks exactly one cart and one
    /// shopping list.
    pub fn from_seed(seed: &SeedData) -> Result<Self> {
        let produce = ProduceInventory::new(&seed.produce);

        let mut items = ItemRegistry::new();
        for item in &seed.items {
            let mut spellings = std::iter::once(&item.name).chain(&item.synonyms);
            if let Some(clash) = spellings.find(|name| produce.contains(name)) {
                return Err(Error::config(format!(
                    "\"{clash}\" names both the item {} and produce",
                    item.name
                )));
            }
            items.insert(
                Item::new(&item.name, &item.description, item.role, item.takeable),
                item.synonyms.iter().map(String::as_str),
            )?;
        }

        for role in [ItemRole::Cart, ItemRole::ShoppingList] {
            let count = items.with_role(role).count();
            if count != 1 {
                return Err(Error::config(format!(
                    "store needs exactly one {role} item, found {count}"
                )));
            }
        }

        let mut locations = LocationRegistry::new();
        for location in &seed.locations {
            locations.insert(
                Location::new(&location.name, &location.description),
                location.synonyms.iter().map(String::as_str),
            )?;
        }

        // Second pass: every name is known, so references can be checked.
        let mut placed: HashMap<String, String> = HashMap::new();
        for location in &seed.locations {
            let here = normalize(&location.name);
            let mut exits = Vec::new();
            for exit in &location.exits {
                let to = locations.resolve(exit).ok_or_else(|| {
                    Error::config(format!("{here} has an exit to unknown location \"{exit}\""))
                })?;
                exits.push(to.to_string());
            }

            let mut present = Vec::new();
            for name in &location.items {
                if let Some(item) = items.resolve(name) {
                    if let Some(other) = placed.insert(item.to_string(), here.clone()) {
                        return Err(Error::config(format!(
                            "{item} is placed in both {other} and {here}"
                        )));
                    }
                    present.push(item.to_string());
                } else if let Some(produce) = produce.resolve(name) {
                    present.push(produce.to_string());
                } else {
                    return Err(Error::config(format!(
                        "{here} stocks unknown item \"{name}\""
                    )));
                }
            }

            let target = locations.get_mut(&here)?;
            for exit in exits {
                target.add_exit(exit);
            }
            for name in present {
                target.add_item(name);
            }
        }

        let start = locations
            .resolve(&seed.start)
            .ok_or_else(|| Error::config(format!("unknown start location \"{}\"", seed.start)))?
            .to_string();

        debug!(
            items = items.len(),
            locations = locations.len(),
            produce = produce.len(),
            %start,
            "catalog built"
        );

        Ok(Self {
            items,
            locations,
            produce,
            start,
        })
    }

    /// Builds the built-in store.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded store data is broken.
    pub fn default_store() -> Result<Self> {
        Self::from_seed(&SeedData::from_toml(stock::DEFAULT_STORE)?)
    }

    /// The item registry.
    #[must_use]
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    /// The item registry, mutably.
    pub fn items_mut(&mut self) -> &mut ItemRegistry {
        &mut self.items
    }

    /// The location registry.
    #[must_use]
    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    /// The location registry, mutably.
    pub fn locations_mut(&mut self) -> &mut LocationRegistry {
        &mut self.locations
    }

    /// The produce inventory.
    #[must_use]
    pub fn produce(&self) -> &ProduceInventory {
        &self.produce
    }

    /// Canonical name of the starting location.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Canonical name of the single item with an acquirable role.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the catalog lost the item, which
    /// validation rules out.
    pub fn role_item(&self, role: ItemRole) -> Result<&str> {
        self.items
            .with_role(role)
            .next()
            .map(Item::name)
            .ok_or_else(|| Error::invariant(format!("catalog has no {role} item")))
    }
}

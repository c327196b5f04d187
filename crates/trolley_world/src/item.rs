//! Items and the item registry.
//!
//! Items are defined once when the catalog is built. Only their `contents`
//! change during a session: the cart fills with produce, the shopping list
//! is written at game start.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use trolley_foundation::{Error, NameTable, Result};

/// The part an item plays in the game, resolved once at catalog build time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemRole {
    /// Holds collected produce.
    Cart,
    /// Holds the produce the player must buy.
    ShoppingList,
    /// Where payment happens.
    Register,
    /// Scenery and anything else.
    #[default]
    Generic,
}

impl ItemRole {
    /// Returns true if the player can end up holding this item.
    #[must_use]
    pub const fn is_acquirable(self) -> bool {
        matches!(self, Self::Cart | Self::ShoppingList)
    }
}

impl fmt::Display for ItemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cart => write!(f, "cart"),
            Self::ShoppingList => write!(f, "shopping list"),
            Self::Register => write!(f, "register"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// A thing in the store.
#[derive(Clone, Debug)]
pub struct Item {
    name: String,
    description: String,
    role: ItemRole,
    takeable: bool,
    /// Ordered entries, duplicates allowed.
    contents: Vec<String>,
    /// Entry -> occurrence count. Must agree with `contents`.
    index: HashMap<String, usize>,
}

impl Item {
    /// Creates an empty item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        role: ItemRole,
        takeable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            role,
            takeable,
            contents: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown by `examine`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The item's role.
    #[must_use]
    pub const fn role(&self) -> ItemRole {
        self.role
    }

    /// Whether `take` may move it to the player.
    #[must_use]
    pub const fn is_takeable(&self) -> bool {
        self.takeable
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    /// Returns true if nothing has been put in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Appends an entry. Duplicates are kept.
    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        *self.index.entry(entry.clone()).or_insert(0) += 1;
        self.contents.push(entry);
    }

    /// Replaces all entries.
    pub fn fill(&mut self, entries: impl IntoIterator<Item = String>) {
        self.contents.clear();
        self.index.clear();
        for entry in entries {
            self.add(entry);
        }
    }

    /// Number of times an entry occurs.
    #[must_use]
    pub fn count(&self, entry: &str) -> usize {
        self.contents.iter().filter(|e| *e == entry).count()
    }

    /// Checks whether an entry is in this item.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the membership index disagrees
    /// with the contents.
    pub fn has(&self, entry: &str) -> Result<bool> {
        let listed = self.count(entry);
        let indexed = self.index.get(entry).copied().unwrap_or(0);
        if listed != indexed {
            return Err(Error::invariant(format!(
                "{} lists \"{entry}\" {listed} time(s) but its index records {indexed}",
                self.name
            )));
        }
        Ok(listed > 0)
    }
}

/// All items, addressable by any of their names.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<String, Item>,
    names: NameTable,
}

impl ItemRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item under its name and synonyms.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a name is already taken.
    pub fn insert<'a>(
        &mut self,
        item: Item,
        synonyms: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        if self.names.contains(item.name()) {
            return Err(Error::config(format!("item \"{}\" defined twice", item.name())));
        }
        let canonical = self.names.register(item.name(), synonyms)?;
        let item = Item { name: canonical.clone(), ..item };
        self.items.insert(canonical, item);
        Ok(())
    }

    /// Resolves any spelling to the canonical item name.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        self.names.resolve(raw)
    }

    /// Returns true if the name resolves to an item.
    #[must_use]
    pub fn exists(&self, raw: &str) -> bool {
        self.names.contains(raw)
    }

    /// Looks up an item by any of its names.
    ///
    /// # Errors
    ///
    /// Returns an unknown item error if the name does not resolve.
    pub fn get(&self, raw: &str) -> Result<&Item> {
        self.resolve(raw)
            .and_then(|canonical| self.items.get(canonical))
            .ok_or_else(|| Error::unknown_item(raw.trim()))
    }

    /// Looks up an item for mutation.
    ///
    /// # Errors
    ///
    /// Returns an unknown item error if the name does not resolve.
    pub fn get_mut(&mut self, raw: &str) -> Result<&mut Item> {
        let canonical = self
            .names
            .resolve(raw)
            .ok_or_else(|| Error::unknown_item(raw.trim()))?
            .to_string();
        self.items
            .get_mut(&canonical)
            .ok_or_else(|| Error::unknown_item(canonical))
    }

    /// The item's description.
    ///
    /// # Errors
    ///
    /// Returns an unknown item error if the name does not resolve.
    pub fn describe(&self, raw: &str) -> Result<&str> {
        self.get(raw).map(Item::description)
    }

    /// Whether the item may be taken.
    ///
    /// # Errors
    ///
    /// Returns an unknown item error if the name does not resolve.
    pub fn is_takeable(&self, raw: &str) -> Result<bool> {
        self.get(raw).map(Item::is_takeable)
    }

    /// Items with the given role, in registration order.
    pub fn with_role(&self, role: ItemRole) -> impl Iterator<Item = &Item> {
        self.iter().filter(move |item| item.role() == role)
    }

    /// All items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.names
            .canonical_names()
            .filter_map(|name| self.items.get(name))
    }

    /// The synonym table.
    #[must_use]
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

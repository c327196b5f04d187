//! Locations and the location registry.

use std::collections::HashMap;

use trolley_foundation::{Error, NameTable, Result};

/// A place in the store.
#[derive(Clone, Debug)]
pub struct Location {
    name: String,
    description: String,
    /// Item and produce names present here, without duplicates.
    items: Vec<String>,
    /// Canonical names of adjacent locations.
    exits: Vec<String>,
}

impl Location {
    /// Creates a location with no items and no exits.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown by `look`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Item and produce names present here.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Adjacent locations.
    #[must_use]
    pub fn exits(&self) -> &[String] {
        &self.exits
    }

    /// Returns true if the name is listed here.
    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Places a name here. Returns false if it was already present.
    pub fn add_item(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_item(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Removes a name. Returns false if it was not present.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    /// Adds an exit. Duplicates are ignored.
    pub fn add_exit(&mut self, to: impl Into<String>) {
        let to = to.into();
        if !self.leads_to(&to) {
            self.exits.push(to);
        }
    }

    /// Returns true if a single move reaches `to`.
    #[must_use]
    pub fn leads_to(&self, to: &str) -> bool {
        self.exits.iter().any(|exit| exit == to)
    }
}

/// All locations, addressable by any of their names.
#[derive(Clone, Debug, Default)]
pub struct LocationRegistry {
    locations: HashMap<String, Location>,
    names: NameTable,
}

impl LocationRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location under its name and synonyms.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a name is already taken.
    pub fn insert<'a>(
        &mut self,
        location: Location,
        synonyms: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        if self.names.contains(location.name()) {
            return Err(Error::config(format!(
                "location \"{}\" defined twice",
                location.name()
            )));
        }
        let canonical = self.names.register(location.name(), synonyms)?;
        let location = Location {
            name: canonical.clone(),
            ..location
        };
        self.locations.insert(canonical, location);
        Ok(())
    }

    /// Resolves any spelling to the canonical location name.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        self.names.resolve(raw)
    }

    /// Returns true if the name resolves to a location.
    #[must_use]
    pub fn exists(&self, raw: &str) -> bool {
        self.names.contains(raw)
    }

    /// Looks up a location by any of its names.
    ///
    /// # Errors
    ///
    /// Returns an unknown location error if the name does not resolve.
    pub fn get(&self, raw: &str) -> Result<&Location> {
        self.resolve(raw)
            .and_then(|canonical| self.locations.get(canonical))
            .ok_or_else(|| Error::unknown_location(raw.trim()))
    }

    /// Looks up a location for mutation.
    ///
    /// # Errors
    ///
    /// Returns an unknown location error if the name does not resolve.
    pub fn get_mut(&mut self, raw: &str) -> Result<&mut Location> {
        let canonical = self
            .names
            .resolve(raw)
            .ok_or_else(|| Error::unknown_location(raw.trim()))?
            .to_string();
        self.locations
            .get_mut(&canonical)
            .ok_or_else(|| Error::unknown_location(canonical))
    }

    /// The location's description.
    ///
    /// # Errors
    ///
    /// Returns an unknown location error if the name does not resolve.
    pub fn describe_location(&self, raw: &str) -> Result<&str> {
        self.get(raw).map(Location::description)
    }

    /// Returns true if `to` is one move away from `from`.
    ///
    /// # Errors
    ///
    /// Returns an unknown location error if either name does not resolve.
    pub fn is_adjacent(&self, from: &str, to: &str) -> Result<bool> {
        let from = self.get(from)?;
        let to = self.get(to)?;
        Ok(from.leads_to(to.name()))
    }

    /// All locations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.names
            .canonical_names()
            .filter_map(|name| self.locations.get(name))
    }

    /// The synonym table.
    #[must_use]
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if no locations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

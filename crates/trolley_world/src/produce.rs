//! The produce inventory.
//!
//! Produce is referenced by name only. It has no [`Item`](crate::Item) of
//! its own; a cart holds produce names and locations stock them.

use trolley_foundation::normalize;

/// Every produce name the store sells, normalized and without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProduceInventory {
    names: Vec<String>,
}

impl ProduceInventory {
    /// Builds an inventory from raw names.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut inventory = Self::default();
        for name in names {
            let name = normalize(name.as_ref());
            if !name.is_empty() && !inventory.names.contains(&name) {
                inventory.names.push(name);
            }
        }
        inventory
    }

    /// Returns the normalized name if it is produce.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let wanted = normalize(raw);
        self.names
            .iter()
            .find(|name| **name == wanted)
            .map(String::as_str)
    }

    /// Returns true if the name is produce.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.resolve(raw).is_some()
    }

    /// All produce names in seed order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of produce names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the store sells nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

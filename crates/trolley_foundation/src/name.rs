//! Name normalization and synonym resolution.
//!
//! Every namespace in the game (items, locations, produce, verbs) compares
//! names after [`normalize`], so "  Small   CART " and "small cart" are the
//! same word.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Trims, lowercases, and collapses runs of whitespace to a single space.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps synonyms to the official name of a thing.
///
/// Canonical names are stored normalized and always resolve to themselves.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    /// Normalized synonym -> canonical name
    synonyms: HashMap<String, String>,
    /// Canonical names in registration order
    canonical: Vec<String>,
}

impl NameTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canonical name together with its synonyms.
    ///
    /// Returns the normalized canonical name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the canonical name is blank or any
    /// synonym already belongs to a different canonical name.
    pub fn register<'a>(
        &mut self,
        canonical: &str,
        synonyms: impl IntoIterator<Item = &'a str>,
    ) -> Result<String> {
        let canonical = normalize(canonical);
        if canonical.is_empty() {
            return Err(Error::config("blank canonical name"));
        }

        self.insert(&canonical, canonical.clone())?;
        for synonym in synonyms {
            let synonym = normalize(synonym);
            if synonym.is_empty() {
                continue;
            }
            self.insert(&canonical, synonym)?;
        }

        if !self.canonical.contains(&canonical) {
            self.canonical.push(canonical.clone());
        }
        Ok(canonical)
    }

    fn insert(&mut self, canonical: &str, synonym: String) -> Result<()> {
        match self.synonyms.get(&synonym) {
            Some(existing) if existing != canonical => Err(Error::config(format!(
                "\"{synonym}\" already names \"{existing}\", cannot also name \"{canonical}\""
            ))),
            Some(_) => Ok(()),
            None => {
                self.synonyms.insert(synonym, canonical.to_string());
                Ok(())
            }
        }
    }

    /// Resolves any spelling of a name to its canonical form.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        self.synonyms.get(&normalize(raw)).map(String::as_str)
    }

    /// Returns true if the raw name resolves.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.resolve(raw).is_some()
    }

    /// Canonical names in registration order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(String::as_str)
    }

    /// Every spelling the table understands, synonyms included.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.synonyms.keys().map(String::as_str)
    }

    /// Number of canonical names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

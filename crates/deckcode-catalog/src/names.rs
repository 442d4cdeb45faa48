//! Identifier to name lookup tables
//!
//! A lighter alternative to [`crate::MemoryCardDatabase`] when only card names
//! are needed. Built from `[{"id": .., "name": ..}, ...]` entries and
//! serialized back as a flat `{"<id>": "<name>"}` object.

use crate::error::Result;
use deckcode_formats::{CardId, CardResolver};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::{Read, Write};

/// One `{id, name}` input entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    /// Card identifier
    pub id: CardId,
    /// Display name
    pub name: String,
}

/// Card names by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    names: HashMap<CardId, String>,
}

impl NameTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON array of [`NameEntry`] values
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidJson` if the input is not an entry array.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<NameEntry> = serde_json::from_reader(reader)?;
        Ok(entries.into_iter().collect())
    }

    /// Write the table as a `{"<id>": "<name>"}` object, keys in ascending id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidJson` if the writer fails.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let ordered: BTreeMap<CardId, &str> = self
            .names
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        serde_json::to_writer(writer, &ordered)?;
        Ok(())
    }

    /// Insert or replace a name
    pub fn insert(&mut self, id: CardId, name: impl Into<String>) -> Option<String> {
        self.names.insert(id, name.into())
    }

    /// Name of `id`
    pub fn get(&self, id: CardId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<NameEntry> for NameTable {
    fn from_iter<I: IntoIterator<Item = NameEntry>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|entry| (entry.id, entry.name)).collect(),
        }
    }
}

impl CardResolver for NameTable {
    type Card = str;

    fn resolve(&self, id: CardId) -> Option<&str> {
        self.get(id)
    }
}

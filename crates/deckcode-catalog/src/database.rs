//! In-memory card database

use crate::card::Card;
use crate::error::{CatalogError, Result};
use deckcode_formats::{CardId, CardResolver};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Accepted catalog file shapes: a bare array or an API-style `{"data": [...]}` wrapper
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Cards(Vec<Card>),
    Wrapped { data: Vec<Card> },
}

impl CatalogFile {
    fn into_cards(self) -> Vec<Card> {
        match self {
            Self::Cards(cards) | Self::Wrapped { data: cards } => cards,
        }
    }
}

/// Card catalog held in memory, indexed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryCardDatabase {
    cards: HashMap<CardId, Card>,
}

impl MemoryCardDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a database from JSON.
    ///
    /// Accepts either an array of cards or an object with a `data` array.
    /// When an identifier appears twice the later record wins.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidJson` if the input is not a valid catalog.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        let mut database = Self::new();
        for card in file.into_cards() {
            if let Some(previous) = database.register(card) {
                tracing::debug!(id = %previous.id, "duplicate catalog entry replaced");
            }
        }
        Ok(database)
    }

    /// Load a database from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if:
    /// - File cannot be opened
    /// - JSON is malformed
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let database = Self::from_json_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            cards = database.len(),
            "loaded card catalog"
        );
        Ok(database)
    }

    /// Build a database from a page iterator such as [`crate::Paginated`].
    ///
    /// # Errors
    ///
    /// Returns the first error any page produced.
    pub fn from_pages<I, E>(pages: I) -> std::result::Result<Self, E>
    where
        I: IntoIterator<Item = std::result::Result<Vec<Card>, E>>,
    {
        let mut database = Self::new();
        for page in pages {
            database.extend(page?);
        }
        Ok(database)
    }

    /// Insert or replace a card, returning the record it replaced.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.id, card)
    }

    /// Remove every card.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Look up a card.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// True when the database knows `id`.
    pub fn has(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are registered.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every card, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

impl FromIterator<Card> for MemoryCardDatabase {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut database = Self::new();
        database.extend(iter);
        database
    }
}

impl Extend<Card> for MemoryCardDatabase {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.register(card);
        }
    }
}

impl CardResolver for MemoryCardDatabase {
    type Card = Card;

    fn resolve(&self, id: CardId) -> Option<&Card> {
        self.get(id)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use deckcode_formats::{Deck, resolve_deck};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG_JSON: &str = r#"[
        {"id": 89631139, "name": "Blue-Eyes White Dragon", "type": "Normal Monster",
         "prices": {"cardmarket": 0.5, "tcgplayer": 0.6, "ebay": 1.0, "amazon": 2.0, "coolstuffinc": 0.9}},
        {"id": 55144522, "name": "Pot of Greed", "type": "Spell Card"}
    ]"#;

    #[test]
    fn test_register_get_reset() {
        let mut db = MemoryCardDatabase::new();
        assert!(db.is_empty());

        let card = Card::new(CardId::new(1), "First", "Normal Monster");
        assert!(db.register(card.clone()).is_none());
        assert!(db.has(CardId::new(1)));
        assert_eq!(db.get(CardId::new(1)), Some(&card));

        let replaced = db.register(Card::new(CardId::new(1), "Renamed", "Normal Monster"));
        assert_eq!(replaced, Some(card));
        assert_eq!(db.len(), 1);

        db.reset();
        assert!(!db.has(CardId::new(1)));
        assert!(db.get(CardId::new(1)).is_none());
    }

    #[test]
    fn test_from_json_reader() {
        let db = MemoryCardDatabase::from_json_reader(CATALOG_JSON.as_bytes()).unwrap();
        assert_eq!(db.len(), 2);
        let blue_eyes = db.get(CardId::new(89_631_139)).unwrap();
        assert_eq!(blue_eyes.card_type, "Normal Monster");
        assert!(blue_eyes.prices.is_some());
        assert!(db.get(CardId::new(55_144_522)).unwrap().prices.is_none());
    }

    #[test]
    fn test_wrapped_data_shape() {
        let json = format!(r#"{{"data": {CATALOG_JSON}, "meta": {{"total_rows": 2}}}}"#);
        let db = MemoryCardDatabase::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_invalid_json() {
        let err = MemoryCardDatabase::from_json_reader(&b"{\"cards\": 3}"[..]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let db = MemoryCardDatabase::load(temp_file.path()).unwrap();
        assert!(db.has(CardId::new(55_144_522)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MemoryCardDatabase::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::LoadFailed { .. }));
    }

    #[test]
    fn test_resolves_deck() {
        let db = MemoryCardDatabase::from_json_reader(CATALOG_JSON.as_bytes()).unwrap();
        let deck = Deck::builder().main(89_631_139u64).main(12u64).build();
        let resolved = resolve_deck(&deck, &db);
        assert_eq!(resolved.known_cards()[0].name, "Blue-Eyes White Dragon");
        assert_eq!(resolved.unknown_ids(), vec![CardId::new(12)]);
    }
}

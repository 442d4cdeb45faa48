//! Deck data model: card identifiers, zones and the three-zone deck

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque catalog identifier for a card
///
/// The codec never checks whether an identifier exists in any catalog; that is
/// the job of a [`CardResolver`](crate::resolver::CardResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    /// Create a card identifier from its raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CardId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u32> for CardId {
    fn from(raw: u32) -> Self {
        Self(u64::from(raw))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CardId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// One of the three deck partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Main deck
    Main,
    /// Extra deck
    Extra,
    /// Side deck
    Side,
}

impl Zone {
    /// All zones in canonical wire order
    pub const ALL: [Self; 3] = [Self::Main, Self::Extra, Self::Side];

    /// Lowercase zone name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Extra => "extra",
            Self::Side => "side",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A deck split into main, extra and side zones
///
/// Each zone is an ordered multiset: duplicates and order are significant and
/// every codec in this crate preserves them exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    /// Main deck cards in order
    pub main: Vec<CardId>,
    /// Extra deck cards in order
    pub extra: Vec<CardId>,
    /// Side deck cards in order
    pub side: Vec<CardId>,
}

impl Deck {
    /// Create an empty deck
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from its three zones
    pub fn from_zones(main: Vec<CardId>, extra: Vec<CardId>, side: Vec<CardId>) -> Self {
        Self { main, extra, side }
    }

    /// Start building a deck card by card
    pub fn builder() -> DeckBuilder {
        DeckBuilder::new()
    }

    /// Cards in the given zone
    pub fn zone(&self, zone: Zone) -> &[CardId] {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    /// Mutable access to a zone
    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::Main => &mut self.main,
            Zone::Extra => &mut self.extra,
            Zone::Side => &mut self.side,
        }
    }

    /// Iterate zones with their cards in canonical order
    pub fn zones(&self) -> impl Iterator<Item = (Zone, &[CardId])> {
        Zone::ALL.into_iter().map(move |zone| (zone, self.zone(zone)))
    }

    /// Total number of cards across all zones
    pub fn len(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }

    /// True when every zone is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every card in wire order (main, extra, side)
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.main
            .iter()
            .chain(&self.extra)
            .chain(&self.side)
            .copied()
    }
}

/// Incremental deck construction
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    deck: Deck,
}

impl DeckBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the main deck
    pub fn main(mut self, id: impl Into<CardId>) -> Self {
        self.deck.main.push(id.into());
        self
    }

    /// Append a card to the extra deck
    pub fn extra(mut self, id: impl Into<CardId>) -> Self {
        self.deck.extra.push(id.into());
        self
    }

    /// Append a card to the side deck
    pub fn side(mut self, id: impl Into<CardId>) -> Self {
        self.deck.side.push(id.into());
        self
    }

    /// Append `copies` of a card to a zone
    pub fn add(mut self, zone: Zone, id: impl Into<CardId>, copies: usize) -> Self {
        let id = id.into();
        self.deck
            .zone_mut(zone)
            .extend(std::iter::repeat_n(id, copies));
        self
    }

    /// Finish the deck
    pub fn build(self) -> Deck {
        self.deck
    }
}

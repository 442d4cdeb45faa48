//! Card resolution against an external catalog
//!
//! Decoding a deck never consults a catalog. Callers that want card metadata
//! run [`resolve_deck`] afterwards with whatever [`CardResolver`] they have;
//! identifiers the catalog does not know come back as
//! [`ResolvedCard::Unknown`] instead of failing the whole deck.

use crate::deck::{CardId, Deck, Zone};
use std::collections::HashMap;

/// Lookup of catalog entries by card identifier
pub trait CardResolver {
    /// Catalog entry type
    type Card: ?Sized;

    /// Find the entry for `id`, or `None` when the catalog does not know it
    fn resolve(&self, id: CardId) -> Option<&Self::Card>;
}

impl<R: CardResolver + ?Sized> CardResolver for &R {
    type Card = R::Card;

    fn resolve(&self, id: CardId) -> Option<&Self::Card> {
        (**self).resolve(id)
    }
}

impl<C> CardResolver for HashMap<CardId, C> {
    type Card = C;

    fn resolve(&self, id: CardId) -> Option<&C> {
        self.get(&id)
    }
}

/// Outcome of resolving a single identifier
#[derive(Debug, PartialEq, Eq)]
pub enum ResolvedCard<'a, C: ?Sized> {
    /// The catalog knows this card
    Known(CardId, &'a C),
    /// The catalog has no entry for this identifier
    Unknown(CardId),
}

// Manual impls: derives would require `C: Clone`/`C: Copy`.
impl<C: ?Sized> Clone for ResolvedCard<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for ResolvedCard<'_, C> {}

impl<'a, C: ?Sized> ResolvedCard<'a, C> {
    /// Identifier that was looked up
    pub fn id(&self) -> CardId {
        match *self {
            Self::Known(id, _) | Self::Unknown(id) => id,
        }
    }

    /// Catalog entry, if known
    pub fn card(&self) -> Option<&'a C> {
        match *self {
            Self::Known(_, card) => Some(card),
            Self::Unknown(_) => None,
        }
    }

    /// True when the catalog had no entry
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// A deck with every identifier looked up, zones and order preserved
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedDeck<'a, C: ?Sized> {
    /// Main deck entries
    pub main: Vec<ResolvedCard<'a, C>>,
    /// Extra deck entries
    pub extra: Vec<ResolvedCard<'a, C>>,
    /// Side deck entries
    pub side: Vec<ResolvedCard<'a, C>>,
}

impl<'a, C: ?Sized> ResolvedDeck<'a, C> {
    /// Entries of a zone
    pub fn zone(&self, zone: Zone) -> &[ResolvedCard<'a, C>] {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    /// Every entry in wire order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedCard<'a, C>> {
        self.main.iter().chain(&self.extra).chain(&self.side)
    }

    /// Identifiers the catalog did not know, in wire order, duplicates kept
    pub fn unknown_ids(&self) -> Vec<CardId> {
        self.iter()
            .filter(|card| card.is_unknown())
            .map(ResolvedCard::id)
            .collect()
    }

    /// Every known catalog entry in wire order
    pub fn known_cards(&self) -> Vec<&'a C> {
        self.iter().filter_map(ResolvedCard::card).collect()
    }

    /// True when every identifier resolved
    pub fn is_fully_resolved(&self) -> bool {
        self.iter().all(|card| !card.is_unknown())
    }
}

/// Resolve every identifier of `deck` through `resolver`
pub fn resolve_deck<'a, R>(deck: &Deck, resolver: &'a R) -> ResolvedDeck<'a, R::Card>
where
    R: CardResolver + ?Sized,
{
    let resolve_zone = |zone: Zone| -> Vec<ResolvedCard<'a, R::Card>> {
        deck.zone(zone)
            .iter()
            .map(|&id| match resolver.resolve(id) {
                Some(card) => ResolvedCard::Known(id, card),
                None => ResolvedCard::Unknown(id),
            })
            .collect()
    };

    let resolved = ResolvedDeck {
        main: resolve_zone(Zone::Main),
        extra: resolve_zone(Zone::Extra),
        side: resolve_zone(Zone::Side),
    };

    let unknown = resolved.iter().filter(|card| card.is_unknown()).count();
    if unknown > 0 {
        tracing::debug!(unknown, total = deck.len(), "deck references unknown cards");
    }

    resolved
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> HashMap<CardId, String> {
        HashMap::from([
            (CardId::new(89_631_139), "Blue-Eyes White Dragon".to_string()),
            (CardId::new(44_508_094), "Stardust Dragon".to_string()),
        ])
    }

    #[test]
    fn test_known_and_unknown_ids() {
        let deck = Deck::builder()
            .main(89_631_139u64)
            .main(1u64)
            .main(89_631_139u64)
            .extra(44_508_094u64)
            .side(1u64)
            .build();
        let catalog = catalog();
        let resolved = resolve_deck(&deck, &catalog);

        assert_eq!(resolved.main.len(), 3);
        assert_eq!(
            resolved.main[0].card().map(String::as_str),
            Some("Blue-Eyes White Dragon")
        );
        assert!(resolved.main[1].is_unknown());
        assert_eq!(resolved.unknown_ids(), vec![CardId::new(1), CardId::new(1)]);
        assert_eq!(resolved.known_cards().len(), 3);
        assert!(!resolved.is_fully_resolved());
    }

    #[test]
    fn test_order_matches_deck() {
        let deck = Deck::builder().main(3u64).main(89_631_139u64).main(2u64).build();
        let catalog = catalog();
        let resolved = resolve_deck(&deck, &catalog);
        let ids: Vec<u64> = resolved.iter().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![3, 89_631_139, 2]);
    }

    #[test]
    fn test_empty_deck_is_fully_resolved() {
        let catalog = catalog();
        let resolved = resolve_deck(&Deck::new(), &catalog);
        assert!(resolved.is_fully_resolved());
        assert!(resolved.zone(Zone::Side).is_empty());
    }

    #[test]
    fn test_resolver_through_reference() {
        let catalog = catalog();
        let by_ref = &catalog;
        assert!(by_ref.resolve(CardId::new(44_508_094)).is_some());
        assert!(by_ref.resolve(CardId::new(5)).is_none());
    }
}

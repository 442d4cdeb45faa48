//! Catalog card records

use crate::price::CardPrices;
use deckcode_formats::CardId;
use serde::{Deserialize, Serialize};

/// One catalog entry
///
/// Deserializes from `{"id": 89631139, "name": "...", "type": "...", "prices": {...}}`.
/// `type` and `prices` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier
    pub id: CardId,
    /// Display name
    pub name: String,
    /// Card type line (e.g. "Normal Monster", "Spell Card")
    #[serde(rename = "type", default)]
    pub card_type: String,
    /// Vendor prices, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<CardPrices>,
}

impl Card {
    /// Create a card without price data
    pub fn new(id: CardId, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: card_type.into(),
            prices: None,
        }
    }

    /// Attach vendor prices
    #[must_use]
    pub fn with_prices(mut self, prices: CardPrices) -> Self {
        self.prices = Some(prices);
        self
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_minimal() {
        let card: Card =
            serde_json::from_str(r#"{"id": 89631139, "name": "Blue-Eyes White Dragon"}"#).unwrap();
        assert_eq!(card.id, CardId::new(89_631_139));
        assert_eq!(card.card_type, "");
        assert!(card.prices.is_none());
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let card = Card::new(CardId::new(7), "Pot of Greed", "Spell Card");
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Pot of Greed", "type": "Spell Card"})
        );
    }
}

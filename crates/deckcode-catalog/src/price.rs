//! Vendor prices, currency conversion and deck price totals
//!
//! Catalog prices are quoted in US dollars per vendor. [`PriceService`]
//! sums them over a list of cards and reports the cards that carry no
//! price data so callers can show a partial total honestly.

use crate::card::Card;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Per-vendor prices of one card, in US dollars
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardPrices {
    /// Cardmarket price
    pub cardmarket: f64,
    /// TCGplayer price
    pub tcgplayer: f64,
    /// eBay price
    pub ebay: f64,
    /// Amazon price
    pub amazon: f64,
    /// CoolStuffInc price
    pub coolstuffinc: f64,
}

impl CardPrices {
    /// All vendors at zero
    pub const ZERO: Self = Self {
        cardmarket: 0.0,
        tcgplayer: 0.0,
        ebay: 0.0,
        amazon: 0.0,
        coolstuffinc: 0.0,
    };

    /// Vendor names paired with their prices, in a fixed order
    pub const fn vendors(&self) -> [(&'static str, f64); 5] {
        [
            ("cardmarket", self.cardmarket),
            ("tcgplayer", self.tcgplayer),
            ("ebay", self.ebay),
            ("amazon", self.amazon),
            ("coolstuffinc", self.coolstuffinc),
        ]
    }

    /// Prices expressed in `currency`
    #[must_use]
    pub fn convert(&self, currency: Currency) -> Self {
        let rate = currency.rate();
        Self {
            cardmarket: self.cardmarket * rate,
            tcgplayer: self.tcgplayer * rate,
            ebay: self.ebay * rate,
            amazon: self.amazon * rate,
            coolstuffinc: self.coolstuffinc * rate,
        }
    }

    /// Collapse the vendor prices to one figure
    ///
    /// A zero price means the vendor has no listing, so [`PriceMode::Low`]
    /// only considers vendors quoting a positive price and is zero when none
    /// do.
    #[allow(clippy::cast_precision_loss)]
    pub fn select(&self, mode: PriceMode) -> f64 {
        let values = self.vendors().map(|(_, price)| price);
        match mode {
            PriceMode::Low => values
                .into_iter()
                .filter(|price| *price > 0.0)
                .reduce(f64::min)
                .unwrap_or(0.0),
            PriceMode::High => values.into_iter().fold(f64::NEG_INFINITY, f64::max),
            PriceMode::Average => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

impl Add for CardPrices {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            cardmarket: self.cardmarket + rhs.cardmarket,
            tcgplayer: self.tcgplayer + rhs.tcgplayer,
            ebay: self.ebay + rhs.ebay,
            amazon: self.amazon + rhs.amazon,
            coolstuffinc: self.coolstuffinc + rhs.coolstuffinc,
        }
    }
}

impl Sum for CardPrices {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for CardPrices {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Display currency with its conversion rate from US dollars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// US dollar (base currency)
    #[default]
    DollarUs,
    /// Euro
    Euro,
    /// Pound sterling
    Pound,
    /// Canadian dollar
    DollarCa,
    /// Australian dollar
    DollarAu,
}

impl Currency {
    /// Every supported currency
    pub const ALL: [Self; 5] = [
        Self::DollarUs,
        Self::Euro,
        Self::Pound,
        Self::DollarCa,
        Self::DollarAu,
    ];

    /// Stable identifier used in configuration and JSON
    pub const fn id(self) -> &'static str {
        match self {
            Self::DollarUs => "dollar_us",
            Self::Euro => "euro",
            Self::Pound => "pound",
            Self::DollarCa => "dollar_ca",
            Self::DollarAu => "dollar_au",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::DollarUs => "US Dollar",
            Self::Euro => "Euro",
            Self::Pound => "Pound",
            Self::DollarCa => "Canadian Dollar",
            Self::DollarAu => "Australian Dollar",
        }
    }

    /// Currency symbol
    pub const fn label(self) -> &'static str {
        match self {
            Self::DollarUs | Self::DollarCa | Self::DollarAu => "$",
            Self::Euro => "€",
            Self::Pound => "£",
        }
    }

    /// Units of this currency per US dollar
    pub const fn rate(self) -> f64 {
        match self {
            Self::DollarUs => 1.0,
            Self::Euro => 0.819,
            Self::Pound => 0.722,
            Self::DollarCa => 1.244,
            Self::DollarAu => 1.253,
        }
    }

    /// Format `amount` with this currency's symbol and two decimals
    pub fn format(self, amount: f64) -> String {
        format!("{}{amount:.2}", self.label())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Currency {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownCurrency(s.to_string()))
    }
}

/// How vendor prices collapse into a single figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    /// Cheapest vendor
    Low,
    /// Mean over all vendors
    #[default]
    Average,
    /// Most expensive vendor
    High,
}

impl PriceMode {
    /// Every supported mode
    pub const ALL: [Self; 3] = [Self::Low, Self::Average, Self::High];

    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Average => "average",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PriceMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownPriceMode(s.to_string()))
    }
}

/// Summed prices of a card list, plus the cards that had none
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLookup<'a> {
    /// Sum over every card with price data
    pub prices: CardPrices,
    /// Cards without price data, in input order
    pub missing: Vec<&'a Card>,
}

impl PriceLookup<'_> {
    /// True when every card contributed to the total
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Aggregates vendor prices over card lists
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceService;

impl PriceService {
    /// Create a price service
    pub const fn new() -> Self {
        Self
    }

    /// True when `card` carries price data
    pub const fn has_price(&self, card: &Card) -> bool {
        card.prices.is_some()
    }

    /// Sum the prices of `cards`; duplicates count once per occurrence
    pub fn get_price<'a, I>(&self, cards: I) -> PriceLookup<'a>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut prices = CardPrices::ZERO;
        let mut missing = Vec::new();

        for card in cards {
            match &card.prices {
                Some(card_prices) => prices = prices + *card_prices,
                None => missing.push(card),
            }
        }

        if !missing.is_empty() {
            tracing::debug!(missing = missing.len(), "cards without price data");
        }

        PriceLookup { prices, missing }
    }
}

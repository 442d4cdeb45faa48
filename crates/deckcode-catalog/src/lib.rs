//! Card catalogs for deckcode
//!
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::must_use_candidate)] // Value-returning accessors
//! This crate provides the catalog side of deck handling: everything that
//! needs to know what a card identifier *means*. Decoding lives in
//! `deckcode-formats` and never depends on this crate.
//!
//! # Components
//!
//! - [`MemoryCardDatabase`]: full card records loaded from JSON, usable as a
//!   [`deckcode_formats::CardResolver`]
//! - [`NameTable`]: identifier to name mapping for name-only lookups
//! - [`PriceService`]: vendor price totals with [`Currency`] conversion
//! - [`Paginated`]: lazy walk over offset-paginated remote sources
//!
//! # Example
//!
//! ```rust
//! use deckcode_catalog::{Card, MemoryCardDatabase, PriceService};
//! use deckcode_formats::{CardId, Deck, resolve_deck};
//!
//! let mut db = MemoryCardDatabase::new();
//! db.register(Card::new(CardId::new(89_631_139), "Blue-Eyes White Dragon", "Normal Monster"));
//!
//! let deck = Deck::builder().main(89_631_139u64).main(1u64).build();
//! let resolved = resolve_deck(&deck, &db);
//! assert_eq!(resolved.unknown_ids(), vec![CardId::new(1)]);
//!
//! let lookup = PriceService::new().get_price(resolved.known_cards());
//! assert_eq!(lookup.missing.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod card;
pub mod database;
pub mod error;
pub mod names;
pub mod pagination;
pub mod price;

pub use card::Card;
pub use database::MemoryCardDatabase;
pub use error::{CatalogError, Result};
pub use names::{NameEntry, NameTable};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageLoader, Paginated, collect_all};
pub use price::{CardPrices, Currency, PriceLookup, PriceMode, PriceService};

//! Deck codecs for three-zone card decks
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format packing
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::must_use_candidate)] // Value-returning accessors
#![allow(clippy::return_self_not_must_use)] // Builder patterns
//! This crate turns a deck (ordered main, extra and side zones of card
//! identifiers) into shareable text and back.
//!
//! # Supported Formats
//!
//! - **Token**: packed binary payload, optionally zlib-compressed, wrapped in
//!   unpadded base64url so it fits in a URL or a single line of text
//! - **YDK**: plaintext list with `#main`, `#extra` and `!side` sentinel lines
//! - **YDKE**: `ydke://` links with one base64 section per zone
//!
//! # Design Principles
//!
//! - **Strict Decoding**: truncated, padded or foreign input is an error, never
//!   a different deck
//! - **Deterministic Encoding**: one deck, one token per format version
//! - **Order Preservation**: zones are never sorted or deduplicated
//! - **Catalog Independence**: decoding never looks cards up; resolution is a
//!   separate step through [`resolver::CardResolver`]
//!
//! # Example
//!
//! ```rust
//! use deckcode_formats::{Deck, import_any, export_token};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = Deck::builder().main(7u64).main(3u64).main(3u64).main(1u64).build();
//! let token = export_token(&deck)?;
//! assert_eq!(import_any(token.as_str())?, deck);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Import/export façade with format detection
pub mod codec;
/// Self-describing zlib wrapper for packed payloads
pub mod compression;
/// Card identifiers, zones and decks
pub mod deck;
/// Encoding and decoding errors
pub mod error;
/// Binary packing of decks
///
/// See the [`pack`] module for the wire layout of each format version.
pub mod pack;
/// Card resolution against an external catalog
pub mod resolver;
/// URL-safe text transport
pub mod text;
/// Plaintext YDK lists
pub mod ydk;
/// `ydke://` links
pub mod ydke;

pub use codec::{
    DeckCodec, DeckFormat, EncodedToken, ExportOptions, export_plain_text, export_token,
    import_any,
};
pub use deck::{CardId, Deck, DeckBuilder, Zone};
pub use error::{DeckError, DecodingError, EncodingError};
pub use pack::FormatVersion;
pub use resolver::{CardResolver, ResolvedCard, ResolvedDeck, resolve_deck};

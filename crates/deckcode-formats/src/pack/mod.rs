//! Dense binary packing of decks
//!
//! A packed payload is a header followed by every zone's identifiers in wire
//! order (main, extra, side):
//!
//! ```text
//! +---------+----------+-----------+----------+------------------------+
//! | version | main_len | extra_len | side_len | ids (main, extra, side) |
//! +---------+----------+-----------+----------+------------------------+
//! ```
//!
//! Unpacking is strict: the header must account for every byte. Missing bytes
//! are [`DecodingError::Truncated`], leftover bytes are
//! [`DecodingError::TrailingBytes`]. The declared identifier count is checked
//! against the available bytes before anything is allocated.
//!
//! # Usage
//!
//! ```rust
//! use deckcode_formats::deck::Deck;
//! use deckcode_formats::pack::{FormatVersion, PackedPayload};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = Deck::builder().main(7u64).main(3u64).extra(44u64).build();
//! let payload = PackedPayload::pack(&deck, FormatVersion::V1)?;
//! assert_eq!(payload.as_bytes().len(), 4 + 3 * 4);
//!
//! let decoded = payload.unpack()?;
//! assert_eq!(decoded, deck);
//! # Ok(())
//! # }
//! ```

mod header;
mod ids;

pub use header::{FormatVersion, PackHeader};

use crate::deck::{Deck, Zone};
use crate::error::{DecodeResult, DecodingError, EncodeResult, EncodingError};
use binrw::io::Cursor;
use binrw::BinRead;

/// Packed deck bytes, before compression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPayload(Vec<u8>);

impl PackedPayload {
    /// Wrap raw bytes received from elsewhere (e.g. after decompression)
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Pack a deck using the given format version
    pub fn pack(deck: &Deck, version: FormatVersion) -> EncodeResult<Self> {
        pack(deck, version).map(Self)
    }

    /// Unpack into a new deck
    pub fn unpack(&self) -> DecodeResult<Deck> {
        unpack(&self.0)
    }

    /// Borrow the packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take ownership of the packed bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Pack `deck` into a header plus identifier stream
pub fn pack(deck: &Deck, version: FormatVersion) -> EncodeResult<Vec<u8>> {
    let header = PackHeader::for_deck(deck, version)?;

    if let Some(id) = deck.iter().find(|id| id.get() > version.max_card_id()) {
        return Err(EncodingError::ValueOutOfRange {
            field: "card id",
            value: id.get(),
            max: version.max_card_id(),
        });
    }

    let mut buffer = Vec::with_capacity(header.min_payload_size());
    header.write_to(&mut buffer);
    for id in deck.iter() {
        ids::write_id(&mut buffer, version, id.get());
    }

    Ok(buffer)
}

/// Unpack a payload produced by [`pack`]
pub fn unpack(data: &[u8]) -> DecodeResult<Deck> {
    let Some(&version_byte) = data.first() else {
        return Err(DecodingError::Truncated {
            expected: 1,
            actual: 0,
        });
    };

    let version = FormatVersion::from_byte(version_byte)
        .ok_or(DecodingError::UnsupportedVersion(version_byte))?;

    if data.len() < version.header_size() {
        return Err(DecodingError::Truncated {
            expected: version.header_size(),
            actual: data.len(),
        });
    }

    let mut cursor = Cursor::new(data);
    let header = PackHeader::read_options(&mut cursor, binrw::Endian::Little, ())
        .map_err(|e| DecodingError::from_binrw(&e, version.header_size(), data.len()))?;

    // Guard before allocating: every identifier needs at least min_id_width bytes.
    let min_size = header.min_payload_size();
    if data.len() < min_size {
        return Err(DecodingError::Truncated {
            expected: min_size,
            actual: data.len(),
        });
    }
    if version.is_fixed_width() && data.len() > min_size {
        return Err(DecodingError::TrailingBytes(data.len() - min_size));
    }

    let mut deck = Deck::new();
    for zone in Zone::ALL {
        let count = header.zone_len(zone);
        let cards = deck.zone_mut(zone);
        cards.reserve_exact(count);
        for _ in 0..count {
            let id = ids::read_id(&mut cursor, version)
                .map_err(|e| DecodingError::from_binrw(&e, data.len() + 1, data.len()))?;
            cards.push(id.into());
        }
    }

    let consumed = cursor.position() as usize;
    if consumed < data.len() {
        return Err(DecodingError::TrailingBytes(data.len() - consumed));
    }

    tracing::trace!(
        version = version.as_byte(),
        main = deck.main.len(),
        extra = deck.extra.len(),
        side = deck.side.len(),
        "unpacked deck payload"
    );

    Ok(deck)
}

//! YDKE deck links
//!
//! `ydke://<main>!<extra>!<side>!`, where each section is standard padded
//! base64 of the zone's identifiers as little-endian u32 values.

use crate::deck::{CardId, Deck, Zone};
use crate::error::{DecodeResult, DecodingError, EncodeResult, EncodingError};
use crate::text::map_base64_error;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Scheme prefix of every YDKE link
pub const YDKE_PREFIX: &str = "ydke://";

const SECTION_SEPARATOR: char = '!';

/// True when `text` starts with the YDKE scheme
pub fn looks_like_ydke(text: &str) -> bool {
    text.trim_start().starts_with(YDKE_PREFIX)
}

/// Render `deck` as a YDKE link
pub fn to_ydke(deck: &Deck) -> EncodeResult<String> {
    let mut out = String::from(YDKE_PREFIX);
    for (_, cards) in deck.zones() {
        let mut bytes = Vec::with_capacity(cards.len() * 4);
        for id in cards {
            let raw = u32::try_from(id.get()).map_err(|_| EncodingError::ValueOutOfRange {
                field: "card id",
                value: id.get(),
                max: u64::from(u32::MAX),
            })?;
            bytes.extend_from_slice(&raw.to_le_bytes());
        }
        out.push_str(&STANDARD.encode(&bytes));
        out.push(SECTION_SEPARATOR);
    }
    Ok(out)
}

/// Parse a YDKE link
pub fn parse_ydke(text: &str) -> DecodeResult<Deck> {
    let body = text
        .trim()
        .strip_prefix(YDKE_PREFIX)
        .ok_or(DecodingError::UnrecognizedFormat)?;

    let mut sections: Vec<&str> = body.split(SECTION_SEPARATOR).collect();
    if sections.last().is_some_and(|last| last.is_empty()) && sections.len() > 3 {
        sections.pop();
    }

    match sections.len() {
        0 | 1 => return Err(DecodingError::MissingSection("extra")),
        2 => return Err(DecodingError::MissingSection("side")),
        3 => {}
        _ => return Err(DecodingError::UnrecognizedFormat),
    }

    let mut deck = Deck::new();
    for (zone, section) in Zone::ALL.into_iter().zip(sections) {
        *deck.zone_mut(zone) = parse_section(section)?;
    }
    Ok(deck)
}

fn parse_section(section: &str) -> DecodeResult<Vec<CardId>> {
    let bytes = STANDARD
        .decode(section)
        .map_err(|e| map_base64_error(&e, section))?;

    if bytes.len() % 4 != 0 {
        return Err(DecodingError::InvalidLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| CardId::from(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .collect())
}

//! Plaintext YDK deck lists
//!
//! A YDK list is UTF-8 text with one decimal card identifier per line, split
//! into zones by three sentinel lines that must appear once each, in order:
//!
//! ```text
//! #main
//! 89631139
//! 89631139
//! #extra
//! 44508094
//! !side
//! ```
//!
//! Blank lines and lines that are not plain decimal digits are errors; they
//! are never skipped. That includes the `#created by ...` comment line that
//! deck editors put at the top of `.ydk` files, so such files need it removed
//! before import. LF and CRLF line endings are both accepted.

use crate::deck::{CardId, Deck, Zone};
use crate::error::{DecodeResult, DecodingError};
use std::io::{self, Write};

/// Sentinel opening the main zone
pub const MAIN_SENTINEL: &str = "#main";
/// Sentinel opening the extra zone
pub const EXTRA_SENTINEL: &str = "#extra";
/// Sentinel opening the side zone
pub const SIDE_SENTINEL: &str = "!side";

/// Sentinel line for a zone
pub const fn sentinel(zone: Zone) -> &'static str {
    match zone {
        Zone::Main => MAIN_SENTINEL,
        Zone::Extra => EXTRA_SENTINEL,
        Zone::Side => SIDE_SENTINEL,
    }
}

fn zone_of_sentinel(line: &str) -> Option<Zone> {
    Zone::ALL.into_iter().find(|zone| sentinel(*zone) == line)
}

/// True when any line of `text` is a YDK sentinel
pub fn looks_like_ydk(text: &str) -> bool {
    text.lines().any(|line| zone_of_sentinel(line.trim()).is_some())
}

/// Write `deck` as a YDK list
pub fn write_ydk<W: Write>(deck: &Deck, writer: &mut W) -> io::Result<()> {
    for (zone, cards) in deck.zones() {
        writeln!(writer, "{}", sentinel(zone))?;
        for id in cards {
            writeln!(writer, "{id}")?;
        }
    }
    writer.flush()
}

/// Render `deck` as a YDK list (LF endings, trailing newline)
pub fn to_ydk(deck: &Deck) -> String {
    let mut out = String::with_capacity(32 + deck.len() * 9);
    for (zone, cards) in deck.zones() {
        out.push_str(sentinel(zone));
        out.push('\n');
        for id in cards {
            out.push_str(&id.to_string());
            out.push('\n');
        }
    }
    out
}

/// Parse a YDK list
pub fn parse_ydk(text: &str) -> DecodeResult<Deck> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let mut deck = Deck::new();
    let mut current: Option<Zone> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let invalid = || DecodingError::InvalidLine {
            line: index + 1,
            content: raw.to_string(),
        };

        if let Some(zone) = zone_of_sentinel(line) {
            // Sentinels must advance by exactly one zone.
            let expected = match current {
                None => Zone::Main,
                Some(Zone::Main) => Zone::Extra,
                Some(Zone::Extra) => Zone::Side,
                Some(Zone::Side) => return Err(invalid()),
            };
            if zone != expected {
                return Err(invalid());
            }
            current = Some(zone);
            continue;
        }

        let Some(zone) = current else {
            return Err(invalid());
        };
        // Digits only: `u64::from_str` would also take a leading `+`.
        if !line.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id: CardId = line.parse().map_err(|_| invalid())?;
        deck.zone_mut(zone).push(id);
    }

    match current {
        Some(Zone::Side) => Ok(deck),
        None => Err(DecodingError::MissingSection(MAIN_SENTINEL)),
        Some(Zone::Main) => Err(DecodingError::MissingSection(EXTRA_SENTINEL)),
        Some(Zone::Extra) => Err(DecodingError::MissingSection(SIDE_SENTINEL)),
    }
}

//! `inspect`: report what a deck code contains

use crate::error::Result;
use deckcode_formats::compression::{self, CompressionMode};
use deckcode_formats::pack;
use deckcode_formats::text::from_text;
use deckcode_formats::{DeckCodec, DeckFormat, DecodingError, Zone};
use std::fmt::Write as _;

/// Describe the detected format, payload details and zone sizes of `input`
///
/// # Errors
///
/// Returns `CliError::Decode` if the input is not a valid deck.
pub fn handle(input: &str) -> Result<String> {
    let format = DeckFormat::sniff(input).ok_or(DecodingError::UnrecognizedFormat)?;

    let mut out = String::new();
    let _ = writeln!(out, "format:  {format}");

    // Tokens are decoded by hand so the payload details come from the same pass.
    let deck = if format == DeckFormat::Token {
        let raw = from_text(input.trim())?;
        let (mode, packed) = compression::decompress_with_mode(&raw)?;
        let deck = pack::unpack(&packed)?;
        let mode = match mode {
            CompressionMode::ZLib => "zlib",
            CompressionMode::None => "stored",
        };
        let version = packed.first().copied().unwrap_or_default();
        let _ = writeln!(
            out,
            "payload: version {version}, {mode}, {} bytes ({} packed)",
            raw.len(),
            packed.len()
        );
        deck
    } else {
        DeckCodec::default().import_as(input, format)?
    };

    for zone in Zone::ALL {
        let _ = writeln!(out, "{:<8} {}", format!("{zone}:"), deck.zone(zone).len());
    }
    let _ = writeln!(out, "total:   {}", deck.len());
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use deckcode_formats::{Deck, export_plain_text, export_token};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inspect_ydk() {
        let deck = Deck::builder().main(1u64).main(2u64).side(3u64).build();
        let report = handle(&export_plain_text(&deck)).unwrap();
        assert_eq!(
            report,
            "format:  ydk\nmain:    2\nextra:   0\nside:    1\ntotal:   3\n"
        );
    }

    #[test]
    fn test_inspect_token_reports_payload() {
        let deck = Deck::builder().main(1u64).build();
        let token = export_token(&deck).unwrap();
        let report = handle(token.as_str()).unwrap();
        assert!(
            report.starts_with("format:  token\npayload: version 1, stored, 9 bytes (8 packed)\n")
        );
    }

    #[test]
    fn test_inspect_compressed_token() {
        let deck = Deck::builder().add(Zone::Main, 89_631_139u64, 40).build();
        let token = export_token(&deck).unwrap();
        let report = handle(token.as_str()).unwrap();

        assert!(report.contains("payload: version 1, zlib, "));
        assert!(report.contains("(164 packed)"));
        assert!(report.ends_with("main:    40\nextra:   0\nside:    0\ntotal:   40\n"));
    }

    #[test]
    fn test_inspect_invalid() {
        assert!(handle("#extra\n#main\n!side\n").is_err());
    }
}

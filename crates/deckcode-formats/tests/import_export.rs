#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end import/export behaviour through the public API
//!
//! Covers the guarantees callers rely on: round-trips through every format,
//! deterministic tokens, order preservation, rejection of corrupted input and
//! tolerance of card identifiers no catalog knows about.

use deckcode_formats::compression::CompressionMode;
use deckcode_formats::text::{from_text, to_text};
use deckcode_formats::{
    CardId, Deck, DeckCodec, DeckFormat, DecodingError, EncodingError, ExportOptions,
    FormatVersion, Zone, export_plain_text, export_token, import_any, resolve_deck,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn tournament_deck() -> Deck {
    Deck::builder()
        .add(Zone::Main, 89_631_139u64, 3)
        .add(Zone::Main, 14_558_127u64, 3)
        .add(Zone::Main, 23_434_538u64, 3)
        .add(Zone::Main, 97_268_402u64, 2)
        .add(Zone::Main, 12_580_477u64, 1)
        .add(Zone::Main, 83_764_718u64, 1)
        .add(Zone::Main, 10_045_474u64, 3)
        .add(Zone::Main, 38_120_068u64, 3)
        .add(Zone::Main, 45_986_603u64, 2)
        .add(Zone::Main, 94_145_021u64, 3)
        .add(Zone::Main, 73_628_505u64, 2)
        .add(Zone::Main, 55_144_522u64, 1)
        .add(Zone::Main, 24_224_830u64, 2)
        .add(Zone::Main, 65_681_983u64, 3)
        .add(Zone::Main, 18_144_506u64, 2)
        .add(Zone::Main, 5_318_639u64, 2)
        .add(Zone::Main, 35_261_759u64, 3)
        .add(Zone::Main, 67_723_438u64, 1)
        .add(Zone::Extra, 44_508_094u64, 2)
        .add(Zone::Extra, 86_066_372u64, 1)
        .add(Zone::Extra, 63_767_246u64, 3)
        .add(Zone::Extra, 1_861_629u64, 2)
        .add(Zone::Extra, 50_588_353u64, 2)
        .add(Zone::Extra, 98_095_162u64, 3)
        .add(Zone::Extra, 27_204_311u64, 2)
        .add(Zone::Side, 14_558_127u64, 1)
        .add(Zone::Side, 59_438_930u64, 3)
        .add(Zone::Side, 73_642_296u64, 3)
        .add(Zone::Side, 24_299_458u64, 3)
        .add(Zone::Side, 94_145_021u64, 2)
        .add(Zone::Side, 40_605_147u64, 3)
        .build()
}

#[test]
fn token_round_trip() {
    let deck = tournament_deck();
    let token = export_token(&deck).expect("Should export");
    assert_eq!(import_any(token.as_str()).expect("Should import"), deck);
}

#[test]
fn plain_text_round_trip() {
    let deck = tournament_deck();
    let text = export_plain_text(&deck);
    assert!(text.starts_with("#main\n"));
    assert_eq!(import_any(&text).expect("Should import"), deck);
}

#[test]
fn realistic_deck_token_is_compressed() {
    let deck = tournament_deck();
    let token = export_token(&deck).expect("Should export");
    let raw = from_text(token.as_str()).expect("Token is valid base64url");
    assert_eq!(raw[0], CompressionMode::ZLib.as_byte());
    // Packed V1 size is a 4-byte header plus 4 bytes per card.
    assert!(raw.len() < 4 + 4 * deck.len());
}

#[test]
fn tokens_are_deterministic() {
    let deck = tournament_deck();
    for version in [FormatVersion::V1, FormatVersion::V2] {
        let codec = DeckCodec::new(ExportOptions::default().with_version(version));
        let first = codec.export_token(&deck).expect("Should export");
        let second = codec.export_token(&deck.clone()).expect("Should export");
        assert_eq!(first.as_str(), second.as_str());
    }
}

#[test]
fn order_and_duplicates_are_preserved() {
    let deck = Deck::builder().main(7u64).main(3u64).main(3u64).main(1u64).build();
    for format in [DeckFormat::Token, DeckFormat::Ydk, DeckFormat::Ydke] {
        let codec = DeckCodec::default();
        let exported = codec.export(&deck, format).expect("Should export");
        let decoded = codec.import_any(&exported).expect("Should import");
        let main: Vec<u64> = decoded.main.iter().map(|id| id.get()).collect();
        assert_eq!(main, vec![7, 3, 3, 1], "{format} reordered the zone");
    }
}

#[test]
fn truncated_token_is_rejected() {
    for deck in [tournament_deck(), Deck::builder().main(1u64).side(2u64).build()] {
        let token = export_token(&deck).expect("Should export");
        let truncated = &token.as_str()[..token.as_str().len() - 1];
        let result = import_any(truncated);
        assert!(result.is_err(), "truncated token decoded to {result:?}");
    }
}

#[test]
fn every_truncation_of_the_raw_payload_is_rejected() {
    let deck = tournament_deck();
    let token = export_token(&deck).expect("Should export");
    let raw = from_text(token.as_str()).expect("Token is valid base64url");

    for len in 0..raw.len() {
        let shortened = to_text(&raw[..len]);
        assert!(
            import_any(&shortened).is_err(),
            "prefix of {len} bytes decoded to a deck"
        );
    }
}

#[test]
fn trailing_bytes_are_rejected() {
    let deck = Deck::builder().main(1u64).build();
    let mut raw = from_text(export_token(&deck).expect("Should export").as_str())
        .expect("Token is valid base64url");
    assert_eq!(raw[0], CompressionMode::None.as_byte());
    raw.extend_from_slice(&[0, 0, 0, 0]);
    assert_eq!(
        import_any(&to_text(&raw)),
        Err(DecodingError::TrailingBytes(4))
    );
}

#[test]
fn empty_deck_round_trips_in_every_format() {
    let codec = DeckCodec::default();
    for format in [DeckFormat::Token, DeckFormat::Ydk, DeckFormat::Ydke] {
        let exported = codec.export(&Deck::new(), format).expect("Should export");
        let decoded = codec.import_any(&exported).expect("Empty deck is valid");
        assert!(decoded.is_empty());
        assert_eq!(decoded, Deck::new());
    }
}

#[test]
fn unknown_format_is_reported() {
    assert_eq!(
        import_any("not-a-valid-deck-code!!"),
        Err(DecodingError::UnrecognizedFormat)
    );
}

#[test]
fn unknown_card_ids_survive_decoding() {
    let deck = Deck::builder()
        .main(89_631_139u64)
        .main(999_999_999u64)
        .build();
    let token = export_token(&deck).expect("Should export");
    let decoded = import_any(token.as_str()).expect("Structure is valid");
    assert_eq!(decoded.main[1], CardId::new(999_999_999));

    let catalog: HashMap<CardId, &str> =
        HashMap::from([(CardId::new(89_631_139), "Blue-Eyes White Dragon")]);
    let resolved = resolve_deck(&decoded, &catalog);
    assert_eq!(resolved.unknown_ids(), vec![CardId::new(999_999_999)]);
    assert_eq!(resolved.known_cards(), vec![&"Blue-Eyes White Dragon"]);
}

#[test]
fn oversize_zone_is_an_encoding_error() {
    let deck = Deck::builder().add(Zone::Side, 1u64, 256).build();
    assert!(matches!(
        export_token(&deck),
        Err(EncodingError::ValueOutOfRange {
            field: "side zone length",
            value: 256,
            max: 255
        })
    ));

    let codec = DeckCodec::new(ExportOptions::default().with_version(FormatVersion::V2));
    let token = codec.export_token(&deck).expect("V2 has wider lengths");
    assert_eq!(import_any(token.as_str()).expect("Should import"), deck);
}

#[test]
fn formats_convert_into_each_other() {
    let codec = DeckCodec::default();
    let deck = tournament_deck();

    let link = codec.export_ydke(&deck).expect("Should export");
    let from_link = codec.import_any(&link).expect("Should import");
    let token = codec.export_token(&from_link).expect("Should export");
    let from_token = codec.import_any(token.as_str()).expect("Should import");
    let list = codec.export_plain_text(&from_token);

    assert_eq!(codec.import_any(&list).expect("Should import"), deck);
}

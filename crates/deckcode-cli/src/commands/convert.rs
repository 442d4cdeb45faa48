//! `convert`: re-encode a deck in another format

use crate::config::ConvertArgs;
use crate::error::Result;
use deckcode_formats::DeckCodec;

/// Decode `input` in whatever format it is and re-encode it as `args.to`
///
/// # Errors
///
/// Returns `CliError` if the input is not a deck or the deck does not fit
/// the target format.
pub fn handle(args: &ConvertArgs, input: &str) -> Result<String> {
    let codec = DeckCodec::new(args.export_options()?);
    let (source, deck) = codec.import_detect(input)?;
    tracing::debug!(%source, to = ?args.to, cards = deck.len(), "converting deck");

    match args.to.deck_format() {
        Some(format) => Ok(codec.export(&deck, format)?),
        None => Ok(serde_json::to_string_pretty(&deck)?),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::TargetFormat;
    use deckcode_formats::{Deck, import_any};
    use pretty_assertions::assert_eq;

    fn args(to: TargetFormat, version: u8) -> ConvertArgs {
        ConvertArgs {
            input: String::new(),
            to,
            format_version: version,
            compression_level: 9,
        }
    }

    #[test]
    fn test_ydk_to_token_and_back() {
        let ydk = "#main\n7\n3\n3\n#extra\n!side\n1\n";
        let token = handle(&args(TargetFormat::Token, 1), ydk).unwrap();
        let back = handle(&args(TargetFormat::Ydk, 1), &token).unwrap();
        assert_eq!(back, ydk);
    }

    #[test]
    fn test_json_output() {
        let json = handle(&args(TargetFormat::Json, 1), "ydke://AQAAAA==!!AgAAAA==!").unwrap();
        let deck: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, Deck::builder().main(1u64).side(2u64).build());
    }

    #[test]
    fn test_version_two_token() {
        let deck = Deck::builder().main(u64::from(u32::MAX) + 1).build();
        let ydk = deckcode_formats::export_plain_text(&deck);
        let token = handle(&args(TargetFormat::Token, 2), &ydk).unwrap();
        assert_eq!(import_any(&token).unwrap(), deck);

        assert!(handle(&args(TargetFormat::Token, 1), &ydk).is_err());
    }

    #[test]
    fn test_garbage_input() {
        assert!(handle(&args(TargetFormat::Ydk, 1), "not-a-valid-deck-code!!").is_err());
    }
}

//! Deck import/export façade
//!
//! [`DeckCodec`] ties the pipeline stages together and picks the right decoder
//! for pasted input:
//!
//! ```text
//! export: Deck -> pack -> compress -> to_text -> token
//! import: input -> sniff -> { token | YDK | YDKE } decoder -> Deck
//! ```
//!
//! Sniffing looks only at structure: a `ydke://` prefix selects YDKE, any YDK
//! sentinel line selects YDK, and input made entirely of token characters
//! goes through the token pipeline. Anything else is
//! [`DecodingError::UnrecognizedFormat`]. Once a path is chosen its error is
//! returned as-is; there is no fallback to another format.
//!
//! # Usage
//!
//! ```rust
//! use deckcode_formats::codec::DeckCodec;
//! use deckcode_formats::deck::Deck;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = DeckCodec::default();
//! let deck = Deck::builder().main(89631139u64).main(89631139u64).extra(44508094u64).build();
//!
//! let token = codec.export_token(&deck)?;
//! assert_eq!(codec.import_any(token.as_str())?, deck);
//!
//! let list = codec.export_plain_text(&deck);
//! assert_eq!(codec.import_any(&list)?, deck);
//! # Ok(())
//! # }
//! ```

use crate::compression::{self, DEFAULT_LEVEL};
use crate::deck::Deck;
use crate::error::{DecodeResult, DecodingError, EncodeResult};
use crate::pack::{self, FormatVersion};
use crate::text;
use crate::ydk;
use crate::ydke;
use std::fmt;
use std::str::FromStr;

/// External deck representations understood by [`DeckCodec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckFormat {
    /// Compact URL-safe token
    Token,
    /// Plaintext YDK list
    Ydk,
    /// `ydke://` link
    Ydke,
}

impl DeckFormat {
    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Ydk => "ydk",
            Self::Ydke => "ydke",
        }
    }

    /// Detect the format of `input` from its structure alone
    pub fn sniff(input: &str) -> Option<Self> {
        if ydke::looks_like_ydke(input) {
            return Some(Self::Ydke);
        }
        if ydk::looks_like_ydk(input) {
            return Some(Self::Ydk);
        }
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.chars().all(text::is_token_char) {
            return Some(Self::Token);
        }
        None
    }
}

impl fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeckFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "token" => Ok(Self::Token),
            "ydk" | "text" | "plain" => Ok(Self::Ydk),
            "ydke" => Ok(Self::Ydke),
            other => Err(format!("unknown deck format: {other}")),
        }
    }
}

/// URL-safe exported deck token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedToken(String);

impl EncodedToken {
    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Export settings
///
/// Tokens are deterministic for a fixed set of options: the same deck always
/// yields the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Packed payload layout
    pub version: FormatVersion,
    /// zlib level, 0-9
    pub compression_level: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            version: FormatVersion::V1,
            compression_level: DEFAULT_LEVEL,
        }
    }
}

impl ExportOptions {
    /// Use a different payload layout
    pub fn with_version(mut self, version: FormatVersion) -> Self {
        self.version = version;
        self
    }

    /// Use a different zlib level (clamped to 9)
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }
}

/// Deck import/export façade
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckCodec {
    options: ExportOptions,
}

impl DeckCodec {
    /// Create a codec with explicit export options
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Export options in use
    pub fn options(&self) -> ExportOptions {
        self.options
    }

    /// Pack, compress and text-encode `deck`
    pub fn export_token(&self, deck: &Deck) -> EncodeResult<EncodedToken> {
        let packed = pack::pack(deck, self.options.version)?;
        let compressed = compression::compress(&packed, self.options.compression_level);

        tracing::debug!(
            version = self.options.version.as_byte(),
            packed = packed.len(),
            compressed = compressed.len(),
            mode = ?compression::mode_of(&compressed),
            "exported deck token"
        );

        Ok(EncodedToken(text::to_text(&compressed)))
    }

    /// Render `deck` as a YDK list
    pub fn export_plain_text(&self, deck: &Deck) -> String {
        ydk::to_ydk(deck)
    }

    /// Render `deck` as a YDKE link
    pub fn export_ydke(&self, deck: &Deck) -> EncodeResult<String> {
        ydke::to_ydke(deck)
    }

    /// Export `deck` in the requested format
    pub fn export(&self, deck: &Deck, format: DeckFormat) -> EncodeResult<String> {
        match format {
            DeckFormat::Token => self.export_token(deck).map(EncodedToken::into_string),
            DeckFormat::Ydk => Ok(self.export_plain_text(deck)),
            DeckFormat::Ydke => self.export_ydke(deck),
        }
    }

    /// Decode a token produced by [`DeckCodec::export_token`]
    ///
    /// Surrounding whitespace is ignored. The token carries its own payload
    /// version, so tokens from any supported version decode regardless of
    /// this codec's export options.
    pub fn import_token(&self, token: &str) -> DecodeResult<Deck> {
        let compressed = text::from_text(token.trim())?;
        let packed = compression::decompress(&compressed)?;
        pack::unpack(&packed)
    }

    /// Decode `input` as a specific format
    pub fn import_as(&self, input: &str, format: DeckFormat) -> DecodeResult<Deck> {
        match format {
            DeckFormat::Token => self.import_token(input),
            DeckFormat::Ydk => ydk::parse_ydk(input),
            DeckFormat::Ydke => ydke::parse_ydke(input),
        }
    }

    /// Detect the format of `input` and decode it
    pub fn import_detect(&self, input: &str) -> DecodeResult<(DeckFormat, Deck)> {
        let Some(format) = DeckFormat::sniff(input) else {
            tracing::debug!(len = input.len(), "input matches no deck format");
            return Err(DecodingError::UnrecognizedFormat);
        };

        tracing::debug!(%format, "sniffed deck format");
        let deck = self.import_as(input, format)?;
        Ok((format, deck))
    }

    /// Detect the format of `input` and decode it, discarding the format
    pub fn import_any(&self, input: &str) -> DecodeResult<Deck> {
        self.import_detect(input).map(|(_, deck)| deck)
    }
}

/// Export a token with default options
pub fn export_token(deck: &Deck) -> EncodeResult<EncodedToken> {
    DeckCodec::default().export_token(deck)
}

/// Export a YDK list
pub fn export_plain_text(deck: &Deck) -> String {
    ydk::to_ydk(deck)
}

/// Import any supported format
pub fn import_any(input: &str) -> DecodeResult<Deck> {
    DeckCodec::default().import_any(input)
}

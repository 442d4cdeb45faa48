//! Error types for encoding and decoding decks

use thiserror::Error;

/// Errors raised while encoding a deck
///
/// Encoding only fails when caller data exceeds what the selected format
/// version can represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A card identifier or zone length does not fit the format's width
    #[error("{field} value {value} exceeds format limit of {max}")]
    ValueOutOfRange {
        /// What overflowed (e.g. "main zone length", "card id")
        field: &'static str,
        /// The offending value
        value: u64,
        /// Largest representable value
        max: u64,
    },
}

/// Errors raised while decoding untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// Fewer bytes than the header promised
    #[error("truncated data: expected {expected} bytes, got {actual} bytes")]
    Truncated {
        /// Bytes required
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Bytes left over after the last promised identifier
    #[error("{0} trailing bytes after payload")]
    TrailingBytes(usize),

    /// Unknown format version byte
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u8),

    /// Compressed stream failed structural or checksum validation
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// Character outside the transport alphabet
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character
        character: char,
        /// Character offset in the input
        position: usize,
    },

    /// Input length cannot be reduced to whole bytes or whole identifiers
    #[error("invalid length: {0}")]
    InvalidLength(usize),

    /// Input matches none of the known deck formats
    #[error("unrecognized deck format")]
    UnrecognizedFormat,

    /// A text line that is neither a card identifier nor an expected sentinel
    #[error("invalid line {line}: {content:?}")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// Offending line content
        content: String,
    },

    /// A required section marker never appeared
    #[error("missing {0} section")]
    MissingSection(&'static str),

    /// Declared sizes exceed the decoder's resource limits
    #[error("payload too large: {declared} exceeds limit of {limit}")]
    PayloadTooLarge {
        /// Size the input asked for
        declared: usize,
        /// Configured ceiling
        limit: usize,
    },
}

/// Any error produced by the deck codecs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Encoding failure
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// Decoding failure
    #[error("decoding failed: {0}")]
    Decoding(#[from] DecodingError),
}

impl DecodingError {
    /// Convert a binrw read failure over an in-memory buffer
    ///
    /// Decoding errors raised inside `BinRead` impls are passed through. Reads
    /// over a slice otherwise only fail by running out of data, so EOF maps to
    /// [`DecodingError::Truncated`] with the byte counts the caller knows.
    pub(crate) fn from_binrw(err: &binrw::Error, expected: usize, actual: usize) -> Self {
        if let Some(inner) = err.custom_err::<Self>() {
            inner.clone()
        } else if err.is_eof() {
            Self::Truncated { expected, actual }
        } else {
            Self::CorruptStream(err.to_string())
        }
    }
}

/// Result type for encoding operations
pub type EncodeResult<T> = std::result::Result<T, EncodingError>;

/// Result type for decoding operations
pub type DecodeResult<T> = std::result::Result<T, DecodingError>;

/// Result type for operations that may fail either way
pub type Result<T> = std::result::Result<T, DeckError>;

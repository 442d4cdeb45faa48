//! URL-safe text transport for binary payloads
//!
//! Bytes are written with the base64url alphabet (`A-Z a-z 0-9 - _`) and no
//! padding, so a token can sit in a query string or on a single line of text
//! without escaping.

use crate::error::{DecodeResult, DecodingError};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// True for characters of the transport alphabet
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Encode bytes as unpadded base64url
pub fn to_text(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded base64url
///
/// Characters are checked against the alphabet before decoding so the error
/// names the first offending character. A length of `4n + 1` can never come
/// from whole bytes and is reported as [`DecodingError::InvalidLength`].
pub fn from_text(text: &str) -> DecodeResult<Vec<u8>> {
    if let Some((position, character)) = text.chars().enumerate().find(|(_, c)| !is_token_char(*c))
    {
        return Err(DecodingError::InvalidCharacter {
            character,
            position,
        });
    }

    if text.len() % 4 == 1 {
        return Err(DecodingError::InvalidLength(text.len()));
    }

    URL_SAFE_NO_PAD.decode(text).map_err(|e| map_base64_error(&e, text))
}

/// Translate a base64 decode failure into the transport error taxonomy
pub(crate) fn map_base64_error(err: &base64::DecodeError, text: &str) -> DecodingError {
    match *err {
        base64::DecodeError::InvalidByte(offset, byte)
        | base64::DecodeError::InvalidLastSymbol(offset, byte) => DecodingError::InvalidCharacter {
            character: text
                .get(offset..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or_else(|| char::from(byte)),
            position: text.get(..offset).map_or(offset, |head| head.chars().count()),
        },
        base64::DecodeError::InvalidLength(len) => DecodingError::InvalidLength(len),
        // Padding: a misplaced `=` is blamed directly, missing padding is a length problem.
        _ => match text.find('=') {
            Some(position) => DecodingError::InvalidCharacter {
                character: '=',
                position: text[..position].chars().count(),
            },
            None => DecodingError::InvalidLength(text.len()),
        },
    }
}

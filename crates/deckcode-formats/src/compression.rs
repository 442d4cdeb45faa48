//! Self-describing compression for packed payloads
//!
//! The first byte selects the mode so a decoder never needs outside metadata:
//!
//! - `N`: stored, the rest of the buffer is the payload as-is
//! - `Z`: zlib stream (adler32-checked) holding the payload
//!
//! [`compress`] falls back to stored whenever zlib would not make the payload
//! smaller, so tiny decks grow by exactly one byte.

use crate::error::{DecodeResult, DecodingError};
use flate2::read::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Read;

/// Maximum allowed decompression size (1 MiB)
///
/// Security: bounds the memory a hostile stream can make the decoder
/// allocate. Real decks pack to a few hundred bytes.
pub const MAX_DECOMPRESSED_SIZE: usize = 1024 * 1024;

/// Output growth step while inflating
const INFLATE_CHUNK: usize = 8192;

/// Default zlib level used by exporters
pub const DEFAULT_LEVEL: u32 = 9;

/// Compression mode marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CompressionMode {
    /// Stored without compression (mode 'N')
    None = b'N',
    /// zlib compression (mode 'Z')
    ZLib = b'Z',
}

impl CompressionMode {
    /// Parse compression mode from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'N' => Some(Self::None),
            b'Z' => Some(Self::ZLib),
            _ => None,
        }
    }

    /// Get the byte representation
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Compress `data` with zlib at `level`, storing it instead when that is smaller
pub fn compress(data: &[u8], level: u32) -> Vec<u8> {
    let mode = match zlib(data, level) {
        Ok(compressed) if compressed.len() < data.len() => {
            return framed(CompressionMode::ZLib, &compressed);
        }
        Ok(_) => CompressionMode::None,
        Err(e) => {
            tracing::debug!("zlib compression failed, storing payload: {e}");
            CompressionMode::None
        }
    };
    framed(mode, data)
}

/// Mode used by a compressed buffer, if the marker is known
pub fn mode_of(data: &[u8]) -> Option<CompressionMode> {
    data.first().copied().and_then(CompressionMode::from_byte)
}

/// Reverse [`compress`]
pub fn decompress(data: &[u8]) -> DecodeResult<Vec<u8>> {
    decompress_with_mode(data).map(|(_, body)| body)
}

/// Reverse [`compress`], also returning the mode the marker selected
pub fn decompress_with_mode(data: &[u8]) -> DecodeResult<(CompressionMode, Vec<u8>)> {
    let Some((&marker, body)) = data.split_first() else {
        return Err(DecodingError::Truncated {
            expected: 1,
            actual: 0,
        });
    };

    match CompressionMode::from_byte(marker) {
        Some(CompressionMode::None) => {
            if body.len() > MAX_DECOMPRESSED_SIZE {
                return Err(DecodingError::PayloadTooLarge {
                    declared: body.len(),
                    limit: MAX_DECOMPRESSED_SIZE,
                });
            }
            Ok((CompressionMode::None, body.to_vec()))
        }
        Some(CompressionMode::ZLib) => Ok((CompressionMode::ZLib, inflate(body)?)),
        None => Err(DecodingError::CorruptStream(format!(
            "unknown compression marker 0x{marker:02X}"
        ))),
    }
}

fn framed(mode: CompressionMode, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(mode.as_byte());
    out.extend_from_slice(body);
    out
}

fn zlib(data: &[u8], level: u32) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(data, Compression::new(level.min(9)));
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed)?;
    Ok(compressed)
}

fn inflate(body: &[u8]) -> DecodeResult<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut decompressed = Vec::new();

    loop {
        if decompressed.len() == decompressed.capacity() {
            decompressed.reserve(INFLATE_CHUNK);
        }

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let input = &body[in_before as usize..];

        let status = inflater
            .decompress_vec(input, &mut decompressed, FlushDecompress::None)
            .map_err(|e| DecodingError::CorruptStream(format!("zlib decompression failed: {e}")))?;

        // Check size limit after every step
        if decompressed.len() > MAX_DECOMPRESSED_SIZE {
            return Err(DecodingError::PayloadTooLarge {
                declared: decompressed.len(),
                limit: MAX_DECOMPRESSED_SIZE,
            });
        }

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled =
                    inflater.total_in() == in_before && inflater.total_out() == out_before;
                if stalled && decompressed.len() < decompressed.capacity() {
                    return Err(DecodingError::CorruptStream(
                        "zlib stream ended before its checksum".to_string(),
                    ));
                }
            }
        }
    }

    let leftover = body.len() - inflater.total_in() as usize;
    if leftover > 0 {
        return Err(DecodingError::CorruptStream(format!(
            "{leftover} bytes after end of zlib stream"
        )));
    }

    Ok(decompressed)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    #[test]
    fn test_tiny_input_is_stored() {
        let data = [1u8, 2, 0, 0];
        let out = compress(&data, DEFAULT_LEVEL);
        assert_eq!(out[0], b'N');
        assert_eq!(&out[1..], &data);
        assert_eq!(mode_of(&out), Some(CompressionMode::None));
        assert_eq!(decompress(&out).expect("Should decompress"), data);
    }

    #[test]
    fn test_repetitive_input_is_compressed() {
        let data: Vec<u8> = std::iter::repeat_n([0x2Au8, 0x11, 0x05, 0x00], 60)
            .flatten()
            .collect();
        let out = compress(&data, DEFAULT_LEVEL);
        assert_eq!(mode_of(&out), Some(CompressionMode::ZLib));
        assert!(out.len() < data.len());
        assert_eq!(decompress(&out).expect("Should decompress"), data);
        assert_eq!(
            decompress_with_mode(&out).expect("Should decompress"),
            (CompressionMode::ZLib, data)
        );
    }

    #[test]
    fn test_empty_input() {
        let out = compress(&[], DEFAULT_LEVEL);
        assert_eq!(out, vec![b'N']);
        assert_eq!(decompress(&out).expect("Stored empty payload"), Vec::<u8>::new());
        assert_eq!(
            decompress(&[]),
            Err(DecodingError::Truncated {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_unknown_marker() {
        let err = decompress(b"Xabc").expect_err("Unknown marker");
        assert!(matches!(err, DecodingError::CorruptStream(msg) if msg.contains("0x58")));
    }

    #[test]
    fn test_corrupt_zlib_stream() {
        let data = vec![7u8; 200];
        let mut out = compress(&data, DEFAULT_LEVEL);
        assert_eq!(out[0], b'Z');

        // Flip a bit in the adler32 trailer.
        let last = out.len() - 1;
        out[last] ^= 0x01;
        assert!(matches!(
            decompress(&out),
            Err(DecodingError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_truncated_zlib_stream() {
        let data = vec![7u8; 200];
        let out = compress(&data, DEFAULT_LEVEL);
        let result = decompress(&out[..out.len() - 1]);
        assert!(matches!(result, Err(DecodingError::CorruptStream(_))));
    }

    #[test]
    fn test_bytes_after_zlib_stream() {
        let data = vec![7u8; 200];
        let mut out = compress(&data, DEFAULT_LEVEL);
        out.push(0);
        let err = decompress(&out).expect_err("Trailing garbage");
        assert!(matches!(err, DecodingError::CorruptStream(msg) if msg.contains("after end")));
    }

    #[test]
    fn test_decompression_bomb_is_capped() {
        let data = vec![0u8; MAX_DECOMPRESSED_SIZE + 1];
        let out = compress(&data, DEFAULT_LEVEL);
        assert!(matches!(
            decompress(&out),
            Err(DecodingError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn test_compression_is_deterministic() {
        let data: Vec<u8> = (0..=255u8).cycle().take(2048).collect();
        assert_eq!(compress(&data, DEFAULT_LEVEL), compress(&data, DEFAULT_LEVEL));
    }

    proptest! {
        #[test]
        fn compress_round_trip(data in prop::collection::vec(any::<u8>(), 0..2048), level in 0u32..=9) {
            let out = compress(&data, level);
            prop_assert!(out.len() <= data.len() + 1);
            let back = decompress(&out).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(back, data);
        }
    }
}

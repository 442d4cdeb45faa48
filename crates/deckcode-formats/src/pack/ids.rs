//! Card identifier encodings for each format version

use super::header::FormatVersion;
use crate::error::DecodingError;
use binrw::{BinRead, BinResult};
use std::io::{Read, Seek};

/// Longest LEB128 encoding of a u64
const MAX_VARINT_LEN: usize = 10;

/// Read one identifier in the layout used by `version`
pub fn read_id<R: Read + Seek>(reader: &mut R, version: FormatVersion) -> BinResult<u64> {
    match version {
        FormatVersion::V1 => u32::read_le(reader).map(u64::from),
        FormatVersion::V2 => read_varint(reader),
    }
}

/// Append one identifier in the layout used by `version`
///
/// The caller must have checked `id <= version.max_card_id()`.
pub fn write_id(buf: &mut Vec<u8>, version: FormatVersion, id: u64) {
    match version {
        FormatVersion::V1 => buf.extend_from_slice(&(id as u32).to_le_bytes()),
        FormatVersion::V2 => write_varint(buf, id),
    }
}

/// Unsigned LEB128, rejecting overlong and non-minimal encodings so that each
/// value has exactly one byte representation
fn read_varint<R: Read + Seek>(reader: &mut R) -> BinResult<u64> {
    let mut value = 0u64;
    let mut byte = [0u8; 1];

    for index in 0..MAX_VARINT_LEN {
        reader.read_exact(&mut byte)?;
        let low = u64::from(byte[0] & 0x7F);

        if index == MAX_VARINT_LEN - 1 && byte[0] > 0x01 {
            return Err(varint_error(reader, "identifier varint overflows 64 bits"));
        }

        value |= low << (7 * index);

        if byte[0] & 0x80 == 0 {
            if index > 0 && byte[0] == 0 {
                return Err(varint_error(reader, "non-canonical identifier varint"));
            }
            return Ok(value);
        }
    }

    Err(varint_error(reader, "identifier varint longer than 10 bytes"))
}

fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let low = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(low);
            return;
        }
        buf.push(low | 0x80);
    }
}

fn varint_error<S: Seek>(reader: &mut S, message: &str) -> binrw::Error {
    binrw::Error::Custom {
        pos: reader.stream_position().unwrap_or(0),
        err: Box::new(DecodingError::CorruptStream(message.to_string())),
    }
}

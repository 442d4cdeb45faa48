//! Versioned header for packed deck payloads
//!
//! Every payload starts with a version byte followed by three zone lengths:
//!
//! - V1: u8 lengths (4 bytes total), ids stored as 4-byte little-endian
//! - V2: u16 little-endian lengths (7 bytes total), ids stored as LEB128 varints

use crate::deck::{Deck, Zone};
use crate::error::{DecodingError, EncodeResult, EncodingError};
use binrw::{BinRead, BinResult};
use std::io::{Read, Seek};

/// Packed payload format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FormatVersion {
    /// Byte-sized zone lengths, fixed 32-bit identifiers
    #[default]
    V1 = 1,
    /// 16-bit zone lengths, variable-width identifiers
    V2 = 2,
}

impl FormatVersion {
    /// Parse the version byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }

    /// Byte written at offset 0
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Size of the complete header in bytes
    pub fn header_size(self) -> usize {
        match self {
            Self::V1 => 4,
            Self::V2 => 7,
        }
    }

    /// Largest zone length this version can declare
    pub fn max_zone_len(self) -> u64 {
        match self {
            Self::V1 => u64::from(u8::MAX),
            Self::V2 => u64::from(u16::MAX),
        }
    }

    /// Largest card identifier this version can store
    pub fn max_card_id(self) -> u64 {
        match self {
            Self::V1 => u64::from(u32::MAX),
            Self::V2 => u64::MAX,
        }
    }

    /// Minimum number of bytes a single identifier occupies
    pub fn min_id_width(self) -> usize {
        match self {
            Self::V1 => 4,
            Self::V2 => 1,
        }
    }

    /// True when every identifier has the same width
    pub fn is_fixed_width(self) -> bool {
        matches!(self, Self::V1)
    }
}

/// Packed payload header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackHeader {
    /// Layout version
    pub version: FormatVersion,
    /// Number of main deck identifiers
    pub main_len: u16,
    /// Number of extra deck identifiers
    pub extra_len: u16,
    /// Number of side deck identifiers
    pub side_len: u16,
}

impl PackHeader {
    /// Build a header describing `deck`, checking every length fits `version`
    pub fn for_deck(deck: &Deck, version: FormatVersion) -> EncodeResult<Self> {
        let len = |zone: Zone| -> EncodeResult<u16> {
            let value = deck.zone(zone).len() as u64;
            if value > version.max_zone_len() {
                return Err(EncodingError::ValueOutOfRange {
                    field: match zone {
                        Zone::Main => "main zone length",
                        Zone::Extra => "extra zone length",
                        Zone::Side => "side zone length",
                    },
                    value,
                    max: version.max_zone_len(),
                });
            }
            Ok(value as u16)
        };

        Ok(Self {
            version,
            main_len: len(Zone::Main)?,
            extra_len: len(Zone::Extra)?,
            side_len: len(Zone::Side)?,
        })
    }

    /// Declared length of a zone
    pub fn zone_len(&self, zone: Zone) -> usize {
        match zone {
            Zone::Main => self.main_len as usize,
            Zone::Extra => self.extra_len as usize,
            Zone::Side => self.side_len as usize,
        }
    }

    /// Total identifiers the header promises
    pub fn total_ids(&self) -> usize {
        self.main_len as usize + self.extra_len as usize + self.side_len as usize
    }

    /// Smallest payload size (header included) that can satisfy this header
    pub fn min_payload_size(&self) -> usize {
        self.version.header_size() + self.total_ids() * self.version.min_id_width()
    }

    /// Append the encoded header to `buf`
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.push(self.version.as_byte());
        match self.version {
            FormatVersion::V1 => {
                buf.extend_from_slice(&[
                    self.main_len as u8,
                    self.extra_len as u8,
                    self.side_len as u8,
                ]);
            }
            FormatVersion::V2 => {
                for len in [self.main_len, self.extra_len, self.side_len] {
                    buf.extend_from_slice(&len.to_le_bytes());
                }
            }
        }
    }
}

impl BinRead for PackHeader {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        endian: binrw::Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let byte = u8::read_options(reader, endian, ())?;
        let Some(version) = FormatVersion::from_byte(byte) else {
            return Err(binrw::Error::Custom {
                pos: reader.stream_position().unwrap_or(0),
                err: Box::new(DecodingError::UnsupportedVersion(byte)),
            });
        };

        let (main_len, extra_len, side_len) = match version {
            FormatVersion::V1 => {
                let mut buf = [0u8; 3];
                reader.read_exact(&mut buf)?;
                (u16::from(buf[0]), u16::from(buf[1]), u16::from(buf[2]))
            }
            FormatVersion::V2 => (
                u16::read_le(reader)?,
                u16::read_le(reader)?,
                u16::read_le(reader)?,
            ),
        };

        Ok(Self {
            version,
            main_len,
            extra_len,
            side_len,
        })
    }
}

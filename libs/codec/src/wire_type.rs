//! # Wire Types - Token Payload Encodings
//!
//! ## Purpose
//!
//! The closed set of on-the-wire payload encodings. Every token is laid out
//! as `id (u16 LE) | type_byte (u8) | payload`, and the type byte alone
//! determines how to size the payload. That property is load-bearing: it is
//! what lets the decoder skip tokens whose id it does not recognize, which
//! is how old servers stay compatible with new clients.
//!
//! ## Format Layout
//!
//! ```text
//! Byte                 [value: u8]
//! Bytes / SmallString  [len: u8]  [payload: 0-255 bytes]
//! String               [len: u16 LE] [payload: 0-65535 bytes]
//! ULongString          [len: u32 LE] [payload: 0-(2^32-1) bytes]
//! Long / ULong         [value: 4 bytes LE]
//! LongLong / Double    [value: 8 bytes LE]
//! Guid                 [value: 16 bytes]
//! ```
//!
//! Byte values are protocol-stable and must agree bit-exactly with the
//! server; gaps in the numbering are retired encodings.

use num_enum::TryFromPrimitive;

/// On-the-wire payload encoding of a token.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum WireType {
    /// Single byte; booleans and small enums.
    Byte = 0x01,
    /// Opaque bytes, 1-byte length prefix.
    Bytes = 0x02,
    /// UTF-8 text, 1-byte length prefix.
    SmallString = 0x04,
    /// UTF-8 text, 2-byte LE length prefix.
    String = 0x05,
    /// UTF-8 text, 4-byte LE length prefix.
    ULongString = 0x06,
    /// 16 bytes, emitted verbatim.
    Guid = 0x07,
    /// Signed 32-bit, LE.
    Long = 0x08,
    /// Unsigned 32-bit, LE.
    ULong = 0x09,
    /// Signed 64-bit, LE.
    LongLong = 0x0A,
    /// IEEE 754 double, LE.
    Double = 0x0C,
}

impl WireType {
    /// Payload size for fixed-width types; `None` for length-prefixed ones.
    pub const fn fixed_payload_size(self) -> Option<usize> {
        match self {
            WireType::Byte => Some(1),
            WireType::Long | WireType::ULong => Some(4),
            WireType::LongLong | WireType::Double => Some(8),
            WireType::Guid => Some(16),
            WireType::Bytes | WireType::SmallString | WireType::String | WireType::ULongString => {
                None
            }
        }
    }

    /// Width of the length prefix for variable-width types.
    pub const fn length_prefix_size(self) -> Option<usize> {
        match self {
            WireType::Bytes | WireType::SmallString => Some(1),
            WireType::String => Some(2),
            WireType::ULongString => Some(4),
            _ => None,
        }
    }

    /// Longest payload this type can carry; `None` for fixed-width types.
    pub const fn max_payload_len(self) -> Option<usize> {
        match self {
            WireType::Bytes | WireType::SmallString => Some(u8::MAX as usize),
            WireType::String => Some(u16::MAX as usize),
            WireType::ULongString => Some(u32::MAX as usize),
            _ => None,
        }
    }

    /// Whether payloads of this type are UTF-8 text.
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            WireType::SmallString | WireType::String | WireType::ULongString
        )
    }
}

//! Codec-level errors.
//!
//! Every error aborts its operation: a failed encode emits no partial frame,
//! a failed decode exposes no partially-populated stream. Encode failures
//! fail the surrounding request before any bytes reach the socket; decode
//! failures are channel-fatal protocol errors.

use thiserror::Error;

use crate::wire_type::WireType;

/// Failure while projecting a request or encoding a header stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid value for header {name}: {value:?}")]
    InvalidHeaderValue { name: String, value: String },

    #[error("header {name} is not valid base64")]
    InvalidBase64 { name: String },

    #[error("invalid resource address: {address:?}")]
    InvalidResourceAddress { address: String },

    #[error("invalid resource id: {id:?}")]
    InvalidResourceId { id: String },

    #[error("value for {name} is {len} bytes, exceeds the {max}-byte wire limit")]
    ValueTooLong {
        name: &'static str,
        len: usize,
        max: usize,
    },

    #[error("value shape does not match wire type {expected:?} of header 0x{id:04X}")]
    DomainViolation { id: u16, expected: WireType },
}

/// Failure while decoding a header block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("header block ends mid-token at offset {offset}")]
    Truncated { offset: usize },

    #[error("wire type mismatch for header 0x{id:04X}: expected {expected:?}, got {got:?}")]
    TypeMismatch {
        id: u16,
        expected: WireType,
        got: WireType,
    },

    #[error("unknown wire type byte 0x{byte:02X}")]
    UnknownType { byte: u8 },

    #[error("string payload of header 0x{id:04X} is not valid UTF-8")]
    InvalidUtf8 { id: u16 },
}

pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

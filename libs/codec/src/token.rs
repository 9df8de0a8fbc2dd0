//! Typed header cells.
//!
//! A [`Token`] binds one registry entry to a presence flag and a value.
//! Invariant: a present token's value shape always matches the entry's wire
//! type, and variable-width payloads fit their length prefix. [`Token::set`]
//! is the only mutation path and enforces both, so the encoder never has to
//! re-validate.

use crate::error::{EncodeError, EncodeResult};
use crate::registry::HeaderDef;
use crate::wire_type::WireType;

/// A value in one of the wire-type domains.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Boolean or small-enum payload for [`WireType::Byte`].
    Byte(u8),
    /// UTF-8 text for the three string wire types.
    Text(String),
    /// Opaque bytes for [`WireType::Bytes`].
    Blob(Vec<u8>),
    /// Signed 32-bit for [`WireType::Long`].
    Long(i32),
    /// Unsigned 32-bit for [`WireType::ULong`].
    ULong(u32),
    /// Signed 64-bit for [`WireType::LongLong`].
    LongLong(i64),
    /// Finite double for [`WireType::Double`].
    Double(f64),
    /// 16 bytes, verbatim, for [`WireType::Guid`].
    Guid([u8; 16]),
}

impl TokenValue {
    /// Whether this value shape is encodable under the given wire type.
    pub fn matches(&self, wire_type: WireType) -> bool {
        match self {
            TokenValue::Byte(_) => wire_type == WireType::Byte,
            TokenValue::Text(_) => wire_type.is_text(),
            TokenValue::Blob(_) => wire_type == WireType::Bytes,
            TokenValue::Long(_) => wire_type == WireType::Long,
            TokenValue::ULong(_) => wire_type == WireType::ULong,
            TokenValue::LongLong(_) => wire_type == WireType::LongLong,
            TokenValue::Double(_) => wire_type == WireType::Double,
            TokenValue::Guid(_) => wire_type == WireType::Guid,
        }
    }

    /// Payload byte length under the given wire type.
    pub fn payload_len(&self, wire_type: WireType) -> usize {
        match self {
            TokenValue::Text(text) => text.len(),
            TokenValue::Blob(bytes) => bytes.len(),
            _ => wire_type
                .fixed_payload_size()
                .unwrap_or(0),
        }
    }

    /// The zero/empty value of a wire type, used for unset tokens.
    pub fn default_for(wire_type: WireType) -> TokenValue {
        match wire_type {
            WireType::Byte => TokenValue::Byte(0),
            WireType::Bytes => TokenValue::Blob(Vec::new()),
            WireType::SmallString | WireType::String | WireType::ULongString => {
                TokenValue::Text(String::new())
            }
            WireType::Guid => TokenValue::Guid([0; 16]),
            WireType::Long => TokenValue::Long(0),
            WireType::ULong => TokenValue::ULong(0),
            WireType::LongLong => TokenValue::LongLong(0),
            WireType::Double => TokenValue::Double(0.0),
        }
    }
}

/// One registry entry plus presence and value.
#[derive(Debug, Clone)]
pub struct Token {
    def: &'static HeaderDef,
    value: Option<TokenValue>,
}

impl Token {
    /// An unset token for the given registry entry.
    pub fn new(def: &'static HeaderDef) -> Self {
        Self { def, value: None }
    }

    pub fn def(&self) -> &'static HeaderDef {
        self.def
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The token's value if present.
    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    /// The token's value, or its wire type's default when unset.
    pub fn value_or_default(&self) -> TokenValue {
        self.value
            .clone()
            .unwrap_or_else(|| TokenValue::default_for(self.def.wire_type))
    }

    /// Set the value, flipping the token to present.
    ///
    /// Fails with [`EncodeError::DomainViolation`] when the value shape does
    /// not match the entry's wire type, and with
    /// [`EncodeError::ValueTooLong`] when a variable-width payload exceeds
    /// its length prefix.
    pub fn set(&mut self, value: TokenValue) -> EncodeResult<()> {
        if !value.matches(self.def.wire_type) {
            return Err(EncodeError::DomainViolation {
                id: self.def.id as u16,
                expected: self.def.wire_type,
            });
        }
        if let Some(max) = self.def.wire_type.max_payload_len() {
            let len = value.payload_len(self.def.wire_type);
            if len > max {
                return Err(EncodeError::ValueTooLong {
                    name: self.def.name,
                    len,
                    max,
                });
            }
        }
        self.value = Some(value);
        Ok(())
    }

    pub(crate) fn set_decoded(&mut self, value: TokenValue) {
        debug_assert!(value.matches(self.def.wire_type));
        self.value = Some(value);
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.def.id == other.def.id && self.value == other.value
    }
}

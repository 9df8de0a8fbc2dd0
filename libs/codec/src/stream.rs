//! # Header Stream - Token Block Encode/Decode
//!
//! ## Purpose
//!
//! The ordered, id-keyed collection of tokens that forms the header block of
//! a request frame. Encoding walks the registry in ascending id order and
//! emits only present tokens, so the byte image is deterministic for a given
//! set of values. Decoding accepts tokens in any order, type-checks ids it
//! knows, and skips ids it does not (the payload length is recoverable from
//! the type byte alone), which keeps old decoders compatible with newer
//! peers.
//!
//! ## Error Discipline
//!
//! Decode fails closed: any truncation, unknown type byte, declared-type
//! mismatch, or malformed string payload aborts the decode, and no
//! partially-populated stream escapes. The outer framing supplies the block
//! length; there is no terminator or token count inside the block.

use tracing::debug;

use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::registry::{self, HeaderId};
use crate::token::{Token, TokenValue};
use crate::wire_type::WireType;

/// An id-keyed token collection; the unit of encode and decode.
///
/// Streams are single-owner: constructed empty, populated once (by the
/// projector or the decoder), then read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStream {
    tokens: Vec<Token>,
}

impl HeaderStream {
    /// A stream with every registry token unset.
    pub fn new() -> Self {
        Self {
            tokens: registry::iter_ordered().map(Token::new).collect(),
        }
    }

    pub fn get(&self, id: HeaderId) -> &Token {
        &self.tokens[id.slot()]
    }

    /// Set a token's value; see [`Token::set`] for the failure modes.
    pub fn set(&mut self, id: HeaderId, value: TokenValue) -> EncodeResult<()> {
        self.tokens[id.slot()].set(value)
    }

    pub fn is_present(&self, id: HeaderId) -> bool {
        self.get(id).is_present()
    }

    /// The value of a token, when present.
    pub fn value(&self, id: HeaderId) -> Option<&TokenValue> {
        self.get(id).value()
    }

    /// Present tokens in ascending id order.
    pub fn present_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_present())
    }

    pub fn present_count(&self) -> usize {
        self.present_tokens().count()
    }

    /// Exact byte length `encode` will produce.
    pub fn encoded_len(&self) -> usize {
        self.present_tokens()
            .map(|token| {
                let wire_type = token.def().wire_type;
                let payload = token
                    .value()
                    .map(|value| value.payload_len(wire_type))
                    .unwrap_or(0);
                let prefix = wire_type.length_prefix_size().unwrap_or(0);
                2 + 1 + prefix + payload
            })
            .sum()
    }

    /// Append the header block to `out`: present tokens in ascending id
    /// order, each as `id (u16 LE) | type_byte | payload`.
    ///
    /// Infallible: [`Token::set`] has already enforced value shapes and
    /// length ceilings.
    pub fn encode(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        for token in self.present_tokens() {
            let def = token.def();
            let value = match token.value() {
                Some(value) => value,
                None => continue,
            };
            out.extend_from_slice(&(def.id as u16).to_le_bytes());
            out.push(def.wire_type as u8);
            encode_payload(def.wire_type, value, out);
        }
    }

    /// The encoded header block as a fresh buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode(&mut out);
        out
    }

    /// Decode a header block. Tokens may arrive in any order; unknown ids
    /// are consumed and dropped.
    pub fn decode(input: &[u8]) -> DecodeResult<Self> {
        let mut stream = HeaderStream::new();
        let mut reader = Reader::new(input);

        while !reader.is_empty() {
            let id = reader.read_u16()?;
            let type_byte = reader.read_u8()?;
            let wire_type = WireType::try_from(type_byte)
                .map_err(|_| DecodeError::UnknownType { byte: type_byte })?;

            match registry::lookup(id) {
                Some(def) => {
                    if def.wire_type != wire_type {
                        return Err(DecodeError::TypeMismatch {
                            id,
                            expected: def.wire_type,
                            got: wire_type,
                        });
                    }
                    let value = read_payload(&mut reader, wire_type, id)?;
                    stream.tokens[def.id.slot()].set_decoded(value);
                }
                None => {
                    skip_payload(&mut reader, wire_type)?;
                    debug!(id, type_byte, "skipped unknown header id");
                }
            }
        }

        Ok(stream)
    }
}

impl Default for HeaderStream {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_payload(wire_type: WireType, value: &TokenValue, out: &mut Vec<u8>) {
    match value {
        TokenValue::Byte(v) => out.push(*v),
        TokenValue::Text(text) => {
            match wire_type {
                WireType::SmallString => out.push(text.len() as u8),
                WireType::String => out.extend_from_slice(&(text.len() as u16).to_le_bytes()),
                WireType::ULongString => out.extend_from_slice(&(text.len() as u32).to_le_bytes()),
                _ => unreachable!("text value on non-string wire type"),
            }
            out.extend_from_slice(text.as_bytes());
        }
        TokenValue::Blob(bytes) => {
            out.push(bytes.len() as u8);
            out.extend_from_slice(bytes);
        }
        TokenValue::Long(v) => out.extend_from_slice(&v.to_le_bytes()),
        TokenValue::ULong(v) => out.extend_from_slice(&v.to_le_bytes()),
        TokenValue::LongLong(v) => out.extend_from_slice(&v.to_le_bytes()),
        TokenValue::Double(v) => out.extend_from_slice(&v.to_le_bytes()),
        TokenValue::Guid(bytes) => out.extend_from_slice(bytes),
    }
}

fn read_payload(reader: &mut Reader<'_>, wire_type: WireType, id: u16) -> DecodeResult<TokenValue> {
    let value = match wire_type {
        WireType::Byte => TokenValue::Byte(reader.read_u8()?),
        WireType::Long => TokenValue::Long(i32::from_le_bytes(reader.read_array()?)),
        WireType::ULong => TokenValue::ULong(u32::from_le_bytes(reader.read_array()?)),
        WireType::LongLong => TokenValue::LongLong(i64::from_le_bytes(reader.read_array()?)),
        WireType::Double => TokenValue::Double(f64::from_le_bytes(reader.read_array()?)),
        WireType::Guid => TokenValue::Guid(reader.read_array()?),
        WireType::Bytes => {
            let len = reader.read_u8()? as usize;
            TokenValue::Blob(reader.take(len)?.to_vec())
        }
        WireType::SmallString | WireType::String | WireType::ULongString => {
            let len = read_text_len(reader, wire_type)?;
            let bytes = reader.take(len)?;
            let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { id })?;
            TokenValue::Text(text.to_owned())
        }
    };
    Ok(value)
}

fn skip_payload(reader: &mut Reader<'_>, wire_type: WireType) -> DecodeResult<()> {
    let len = match wire_type.fixed_payload_size() {
        Some(len) => len,
        None => match wire_type {
            WireType::Bytes | WireType::SmallString => reader.read_u8()? as usize,
            WireType::String => u16::from_le_bytes(reader.read_array()?) as usize,
            WireType::ULongString => u32::from_le_bytes(reader.read_array()?) as usize,
            _ => unreachable!("variable wire type without length prefix"),
        },
    };
    reader.take(len)?;
    Ok(())
}

fn read_text_len(reader: &mut Reader<'_>, wire_type: WireType) -> DecodeResult<usize> {
    Ok(match wire_type {
        WireType::SmallString => reader.read_u8()? as usize,
        WireType::String => u16::from_le_bytes(reader.read_array()?) as usize,
        WireType::ULongString => u32::from_le_bytes(reader.read_array()?) as usize,
        _ => unreachable!("fixed wire type has no text length"),
    })
}

/// Bounds-checked cursor over the input block.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn take(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or(DecodeError::Truncated { offset: self.pos })?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let bytes = self.take(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }
}

//! # RNTBD Token-Stream Codec
//!
//! ## Purpose
//!
//! Translates a generic, string-keyed request (a resource-identifying
//! path, an operation type, a payload, and a map of textual headers) into
//! the compact, strongly-typed binary header block of an RNTBD request
//! frame, and back. This crate is the "rules" layer of the direct
//! transport: the permissive textual header space is forced into the
//! versioned wire vocabulary here, and nowhere else.
//!
//! ## Architecture Role
//!
//! ```text
//! rntbd_types → [projector] → [header stream] → encode → byte block
//!     ↑             ↓               ↓                        ↓
//! Request       type coercion   typed tokens            outer framing
//! shape         enum mapping    id-ascending            and TCP I/O
//!               path parsing    wire layout             (out of scope)
//! ```
//!
//! Decoding runs the inverse: byte block → header stream → typed token
//! reads. Wire enum values are not re-mapped to public enums on decode;
//! that is the caller's responsibility.
//!
//! ## What This Crate Contains
//!
//! - Header registry: stable `u16` wire identifiers and their wire types
//! - Token and header stream: presence-tracked typed cells, byte-exact
//!   encode in ascending id order, order-insensitive decode with unknown-id
//!   skip
//! - Request projector: the three-phase population of a stream from a
//!   [`rntbd_types::Request`]
//! - Resource-id scheme decoder
//!
//! ## What This Crate Does NOT Contain
//!
//! - Frame assembly, length prefixes, or checksums (outer framing)
//! - TCP connection management, TLS, flow control (transport)
//! - Retry, routing, auth token generation (upstream SDK layers)
//!
//! ## Concurrency
//!
//! Encode and decode are synchronous pure functions. The registry is a
//! process-wide immutable table, safe for unsynchronized reads; streams are
//! single-owner and never shared across threads.

pub mod error;
pub mod projector;
pub mod registry;
pub mod resource_id;
pub mod stream;
pub mod token;
pub mod wire_enums;
pub mod wire_type;

pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use projector::project;
pub use registry::{iter_ordered, lookup, HeaderDef, HeaderId};
pub use stream::HeaderStream;
pub use token::{Token, TokenValue};
pub use wire_enums::{
    WireConsistencyLevel, WireContentSerializationFormat, WireEnumerationDirection,
    WireFanoutOperationState, WireIndexingDirective, WireMigrateCollectionDirective,
    WireReadFeedKeyType, WireRemoteStorageType,
};
pub use wire_type::WireType;

//! # RNTBD Types Library
//!
//! Shared request-model definitions for the RNTBD direct-connectivity
//! transport: the abstract request shape handed to the token-stream codec,
//! the SDK-stable public enums carried in textual headers, and the canonical
//! header-name and path-segment vocabularies.
//!
//! ## Design Philosophy
//!
//! - **Pure data**: no protocol rules live here; encoding, validation and
//!   wire-id mapping belong to `rntbd_codec`
//! - **Stable surface**: public enum variants are SDK-stable identifiers,
//!   distinct from the protocol's wire ids
//! - **Case-exact headers**: header names are canonical strings produced by
//!   the SDK itself, looked up without folding
//!
//! ## Integration Points
//!
//! - **`rntbd_codec`**: consumes [`Request`] and projects it onto the typed
//!   header stream
//! - **Upstream SDK layers**: construct [`Request`] from resource builders,
//!   retry policies and address resolution (out of scope here)

pub mod enums;
pub mod headers;
pub mod operation;
pub mod paths;
pub mod request;

pub use enums::{
    ConsistencyLevel, ContentSerializationFormat, EnumerationDirection, FanoutOperationState,
    IndexingDirective, MigrateCollectionDirective, ReadFeedKeyType, RemoteStorageType,
};
pub use operation::{OperationType, ResourceType};
pub use request::{HeaderMap, Request};

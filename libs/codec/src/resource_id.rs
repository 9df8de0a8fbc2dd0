//! Resource-id scheme decoder.
//!
//! A resource id is a compact, self-describing identifier: the text form is
//! base64 over an altered alphabet (`-` stands in for `/`), and the decoded
//! byte width is fixed by the resource type. A database id is the 4-byte
//! prefix of every id under it, a collection id extends it to 8 bytes, a
//! document id to 16, an attachment id to 20. Offers live in their own
//! 3-byte space. The decoded bytes travel as the `ResourceId` token's raw
//! payload; no external registry is needed to interpret them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rntbd_types::ResourceType;

use crate::error::{EncodeError, EncodeResult};

/// Decoded width of a resource id, by resource type.
pub const fn decoded_len(resource_type: ResourceType) -> usize {
    match resource_type {
        ResourceType::Offer => 3,
        ResourceType::Database => 4,
        ResourceType::DocumentCollection
        | ResourceType::User
        | ResourceType::UserDefinedType => 8,
        ResourceType::Document
        | ResourceType::StoredProcedure
        | ResourceType::UserDefinedFunction
        | ResourceType::Trigger
        | ResourceType::Conflict
        | ResourceType::PartitionKeyRange
        | ResourceType::Schema
        | ResourceType::Permission => 16,
        ResourceType::Attachment => 20,
    }
}

/// Decode a textual resource id into its fixed-width byte form.
///
/// Fails with [`EncodeError::InvalidResourceId`] when the text is not valid
/// altered-alphabet base64 or decodes to the wrong width for the resource
/// type.
pub fn parse(resource_type: ResourceType, id: &str) -> EncodeResult<Vec<u8>> {
    let canonical = id.replace('-', "/");
    let bytes = STANDARD
        .decode(canonical.as_bytes())
        .map_err(|_| EncodeError::InvalidResourceId { id: id.to_owned() })?;

    if bytes.len() != decoded_len(resource_type) {
        return Err(EncodeError::InvalidResourceId { id: id.to_owned() });
    }

    Ok(bytes)
}

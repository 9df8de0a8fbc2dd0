//! The abstract request handed to the token-stream codec.
//!
//! Upstream SDK layers (resource builders, address resolution, retry) fill
//! this shape in; the codec consumes it read-only. Header names are
//! case-exact canonical spellings from [`crate::headers`].

use std::collections::HashMap;

use crate::operation::{OperationType, ResourceType};

/// String-keyed request headers, canonical casing.
pub type HeaderMap = HashMap<String, String>;

/// A generic HTTP-style request targeting one replica of a partition.
#[derive(Debug, Clone)]
pub struct Request {
    /// What the request does.
    pub operation_type: OperationType,
    /// The kind of resource it addresses.
    pub resource_type: ResourceType,
    /// Gateway-assigned compact resource id, when one exists. Name-based
    /// requests may carry one too.
    pub resource_id: Option<String>,
    /// Resource address, either name-based (`/dbs/<db>/colls/<coll>/…`) or
    /// rid-based.
    pub resource_address: String,
    /// Whether `resource_address` is name-based and must be parsed into
    /// discrete path tokens.
    pub is_name_based: bool,
    /// Physical path of the replica this request is bound to.
    pub replica_path: String,
    /// Document payload, if the operation carries one.
    pub content: Option<Vec<u8>>,
    /// Textual headers, canonical casing.
    pub headers: HeaderMap,
    /// Feed continuation token, carried on the request rather than in the
    /// header map.
    pub continuation: Option<String>,
}

impl Request {
    pub fn new(
        operation_type: OperationType,
        resource_type: ResourceType,
        replica_path: impl Into<String>,
    ) -> Self {
        Self {
            operation_type,
            resource_type,
            resource_id: None,
            resource_address: String::new(),
            is_name_based: false,
            replica_path: replica_path.into(),
            content: None,
            headers: HeaderMap::new(),
            continuation: None,
        }
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Set a name-based address; the codec will parse it into path tokens.
    pub fn with_name_based_address(mut self, address: impl Into<String>) -> Self {
        self.resource_address = address.into();
        self.is_name_based = true;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.resource_address = address.into();
        self
    }

    pub fn with_content(mut self, content: Vec<u8>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_continuation(mut self, continuation: impl Into<String>) -> Self {
        self.continuation = Some(continuation.into());
        self
    }

    /// Whether the request carries a non-empty payload.
    pub fn has_payload(&self) -> bool {
        self.content.as_ref().is_some_and(|c| !c.is_empty())
    }
}

//! Operation and resource classification for a request.
//!
//! Both enums are SDK-surface identifiers. The codec never sends them as-is;
//! they steer header selection (`If-Match` vs `If-None-Match`) and the
//! resource-id width check.

/// What the request does to its target resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Create,
    Delete,
    ExecuteJavaScript,
    Head,
    HeadFeed,
    Patch,
    Query,
    Read,
    ReadFeed,
    Replace,
    SqlQuery,
    Upsert,
}

impl OperationType {
    /// Read-style operations carry their etag in `If-None-Match`; everything
    /// else carries it in `If-Match`.
    pub fn uses_if_none_match(self) -> bool {
        matches!(self, OperationType::Read | OperationType::ReadFeed)
    }
}

/// The kind of resource a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Attachment,
    Conflict,
    Database,
    Document,
    DocumentCollection,
    Offer,
    PartitionKeyRange,
    Permission,
    Schema,
    StoredProcedure,
    Trigger,
    User,
    UserDefinedFunction,
    UserDefinedType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_operations_select_if_none_match() {
        assert!(OperationType::Read.uses_if_none_match());
        assert!(OperationType::ReadFeed.uses_if_none_match());
        assert!(!OperationType::Create.uses_if_none_match());
        assert!(!OperationType::Replace.uses_if_none_match());
        assert!(!OperationType::Query.uses_if_none_match());
    }
}

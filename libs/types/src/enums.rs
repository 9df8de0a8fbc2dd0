//! Public (SDK-stable) enums carried as textual header values.
//!
//! Each enum offers `from_header_value`, a case-insensitive parse of the
//! header vocabulary. These are deliberately distinct from the wire enums in
//! `rntbd_codec::wire_enums`: public identifiers are stable in the SDK
//! surface, wire ids are stable in the protocol, and the two numberings do
//! not coincide.

/// Consistency guarantee requested for a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsistencyLevel {
    Strong,
    BoundedStaleness,
    Session,
    Eventual,
    ConsistentPrefix,
}

impl ConsistencyLevel {
    /// Parse the `x-ms-consistency-level` header value. Accepts the short
    /// form `"Bounded"` as well as the full `"BoundedStaleness"`.
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("strong", ConsistencyLevel::Strong),
                ("bounded", ConsistencyLevel::BoundedStaleness),
                ("boundedstaleness", ConsistencyLevel::BoundedStaleness),
                ("session", ConsistencyLevel::Session),
                ("eventual", ConsistencyLevel::Eventual),
                ("consistentprefix", ConsistencyLevel::ConsistentPrefix),
            ],
        )
    }
}

/// Payload serialization negotiated for document bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSerializationFormat {
    JsonText,
    CosmosBinary,
}

impl ContentSerializationFormat {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("jsontext", ContentSerializationFormat::JsonText),
                ("cosmosbinary", ContentSerializationFormat::CosmosBinary),
            ],
        )
    }
}

/// Direction of a feed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationDirection {
    Forward,
    Reverse,
}

impl EnumerationDirection {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("forward", EnumerationDirection::Forward),
                ("reverse", EnumerationDirection::Reverse),
            ],
        )
    }
}

/// Progress marker for a fanout operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanoutOperationState {
    Started,
    Completed,
}

impl FanoutOperationState {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("started", FanoutOperationState::Started),
                ("completed", FanoutOperationState::Completed),
            ],
        )
    }
}

/// Per-request override of the collection's indexing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexingDirective {
    Default,
    Exclude,
    Include,
}

impl IndexingDirective {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("default", IndexingDirective::Default),
                ("exclude", IndexingDirective::Exclude),
                ("include", IndexingDirective::Include),
            ],
        )
    }
}

/// Collection migration directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrateCollectionDirective {
    Freeze,
    Thaw,
}

impl MigrateCollectionDirective {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("freeze", MigrateCollectionDirective::Freeze),
                ("thaw", MigrateCollectionDirective::Thaw),
            ],
        )
    }
}

/// Storage tier backing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteStorageType {
    Standard,
    Premium,
}

impl RemoteStorageType {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("standard", RemoteStorageType::Standard),
                ("premium", RemoteStorageType::Premium),
            ],
        )
    }
}

/// Key space used to bound a read-feed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadFeedKeyType {
    ResourceId,
    EffectivePartitionKey,
}

impl ReadFeedKeyType {
    pub fn from_header_value(value: &str) -> Option<Self> {
        match_ascii(
            value,
            &[
                ("resourceid", ReadFeedKeyType::ResourceId),
                ("effectivepartitionkey", ReadFeedKeyType::EffectivePartitionKey),
            ],
        )
    }
}

fn match_ascii<T: Copy>(value: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(text, _)| value.eq_ignore_ascii_case(text))
        .map(|&(_, variant)| variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_level_parse_is_case_insensitive() {
        assert_eq!(
            ConsistencyLevel::from_header_value("session"),
            Some(ConsistencyLevel::Session)
        );
        assert_eq!(
            ConsistencyLevel::from_header_value("SESSION"),
            Some(ConsistencyLevel::Session)
        );
        assert_eq!(
            ConsistencyLevel::from_header_value("ConsistentPrefix"),
            Some(ConsistencyLevel::ConsistentPrefix)
        );
        assert_eq!(ConsistencyLevel::from_header_value("Relaxed"), None);
    }

    #[test]
    fn bounded_staleness_accepts_both_spellings() {
        assert_eq!(
            ConsistencyLevel::from_header_value("Bounded"),
            Some(ConsistencyLevel::BoundedStaleness)
        );
        assert_eq!(
            ConsistencyLevel::from_header_value("BoundedStaleness"),
            Some(ConsistencyLevel::BoundedStaleness)
        );
    }

    #[test]
    fn directive_vocabularies_are_closed() {
        assert_eq!(
            IndexingDirective::from_header_value("exclude"),
            Some(IndexingDirective::Exclude)
        );
        assert_eq!(IndexingDirective::from_header_value("lazy"), None);
        assert_eq!(
            MigrateCollectionDirective::from_header_value("Thaw"),
            Some(MigrateCollectionDirective::Thaw)
        );
        assert_eq!(MigrateCollectionDirective::from_header_value(""), None);
        assert_eq!(
            ReadFeedKeyType::from_header_value("EffectivePartitionKey"),
            Some(ReadFeedKeyType::EffectivePartitionKey)
        );
    }
}

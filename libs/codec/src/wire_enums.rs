//! # Wire Enums - Protocol-Stable Small Integers
//!
//! The SDK's public enums and the protocol's wire enums number the same
//! concepts differently: public identifiers are stable in the SDK surface,
//! wire ids are stable in the protocol, and they happen not to coincide.
//! The two live as distinct types with explicit conversions; collapsing
//! them would couple the SDK surface to the wire.
//!
//! Decode does not re-map wire values back to public enums; that is the
//! caller's responsibility.

use num_enum::TryFromPrimitive;
use rntbd_types::{
    ConsistencyLevel, ContentSerializationFormat, EnumerationDirection, FanoutOperationState,
    IndexingDirective, MigrateCollectionDirective, ReadFeedKeyType, RemoteStorageType,
};

/// Consistency level as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireConsistencyLevel {
    Strong = 0x00,
    BoundedStaleness = 0x01,
    Session = 0x02,
    Eventual = 0x03,
    ConsistentPrefix = 0x04,
}

impl WireConsistencyLevel {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<ConsistencyLevel> for WireConsistencyLevel {
    fn from(level: ConsistencyLevel) -> Self {
        match level {
            ConsistencyLevel::Strong => WireConsistencyLevel::Strong,
            ConsistencyLevel::BoundedStaleness => WireConsistencyLevel::BoundedStaleness,
            ConsistencyLevel::Session => WireConsistencyLevel::Session,
            ConsistencyLevel::Eventual => WireConsistencyLevel::Eventual,
            ConsistencyLevel::ConsistentPrefix => WireConsistencyLevel::ConsistentPrefix,
        }
    }
}

/// Content serialization format as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireContentSerializationFormat {
    JsonText = 0x00,
    CosmosBinary = 0x01,
}

impl WireContentSerializationFormat {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<ContentSerializationFormat> for WireContentSerializationFormat {
    fn from(format: ContentSerializationFormat) -> Self {
        match format {
            ContentSerializationFormat::JsonText => WireContentSerializationFormat::JsonText,
            ContentSerializationFormat::CosmosBinary => {
                WireContentSerializationFormat::CosmosBinary
            }
        }
    }
}

/// Feed enumeration direction as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireEnumerationDirection {
    Forward = 0x01,
    Reverse = 0x02,
}

impl WireEnumerationDirection {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<EnumerationDirection> for WireEnumerationDirection {
    fn from(direction: EnumerationDirection) -> Self {
        match direction {
            EnumerationDirection::Forward => WireEnumerationDirection::Forward,
            EnumerationDirection::Reverse => WireEnumerationDirection::Reverse,
        }
    }
}

/// Fanout operation state as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireFanoutOperationState {
    Started = 0x01,
    Completed = 0x02,
}

impl WireFanoutOperationState {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<FanoutOperationState> for WireFanoutOperationState {
    fn from(state: FanoutOperationState) -> Self {
        match state {
            FanoutOperationState::Started => WireFanoutOperationState::Started,
            FanoutOperationState::Completed => WireFanoutOperationState::Completed,
        }
    }
}

/// Indexing directive as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireIndexingDirective {
    Default = 0x00,
    Exclude = 0x01,
    Include = 0x02,
}

impl WireIndexingDirective {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<IndexingDirective> for WireIndexingDirective {
    fn from(directive: IndexingDirective) -> Self {
        match directive {
            IndexingDirective::Default => WireIndexingDirective::Default,
            IndexingDirective::Exclude => WireIndexingDirective::Exclude,
            IndexingDirective::Include => WireIndexingDirective::Include,
        }
    }
}

/// Collection migration directive as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireMigrateCollectionDirective {
    Freeze = 0x00,
    Thaw = 0x01,
}

impl WireMigrateCollectionDirective {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<MigrateCollectionDirective> for WireMigrateCollectionDirective {
    fn from(directive: MigrateCollectionDirective) -> Self {
        match directive {
            MigrateCollectionDirective::Freeze => WireMigrateCollectionDirective::Freeze,
            MigrateCollectionDirective::Thaw => WireMigrateCollectionDirective::Thaw,
        }
    }
}

/// Remote storage tier as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireRemoteStorageType {
    Standard = 0x01,
    Premium = 0x02,
}

impl WireRemoteStorageType {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<RemoteStorageType> for WireRemoteStorageType {
    fn from(storage: RemoteStorageType) -> Self {
        match storage {
            RemoteStorageType::Standard => WireRemoteStorageType::Standard,
            RemoteStorageType::Premium => WireRemoteStorageType::Premium,
        }
    }
}

/// Read-feed key space as carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum WireReadFeedKeyType {
    ResourceId = 0x00,
    EffectivePartitionKey = 0x01,
}

impl WireReadFeedKeyType {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl From<ReadFeedKeyType> for WireReadFeedKeyType {
    fn from(key_type: ReadFeedKeyType) -> Self {
        match key_type {
            ReadFeedKeyType::ResourceId => WireReadFeedKeyType::ResourceId,
            ReadFeedKeyType::EffectivePartitionKey => WireReadFeedKeyType::EffectivePartitionKey,
        }
    }
}

//! # Header Registry - Stable Wire Identifiers
//!
//! ## Purpose
//!
//! Append-only catalog of every recognized request-header field: stable
//! `u16` wire identifier, wire type, and required flag. Identifiers are
//! never reused; gaps in the numbering (0x2D-0x2F, 0x31, 0x36-0x39, 0x55)
//! are retired fields and stay reserved.
//!
//! ## Representation
//!
//! The registry is a process-wide immutable table plus a const-built
//! direct-index slot map, so `lookup` is a bounds check and two array
//! reads. Safe for unsynchronized concurrent reads.

use num_enum::TryFromPrimitive;

use crate::wire_type::WireType;

/// Stable wire identifier of a request-header field.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive)]
pub enum HeaderId {
    ResourceId = 0x0000,
    AuthorizationToken = 0x0001,
    PayloadPresent = 0x0002,
    Date = 0x0003,
    PageSize = 0x0004,
    SessionToken = 0x0005,
    ContinuationToken = 0x0006,
    IndexingDirective = 0x0007,
    Match = 0x0008,
    PreTriggerInclude = 0x0009,
    PostTriggerInclude = 0x000A,
    IsFanout = 0x000B,
    CollectionPartitionIndex = 0x000C,
    CollectionServiceIndex = 0x000D,
    PreTriggerExclude = 0x000E,
    PostTriggerExclude = 0x000F,
    ConsistencyLevel = 0x0010,
    EntityId = 0x0011,
    ResourceSchemaName = 0x0012,
    ReplicaPath = 0x0013,
    ResourceTokenExpiry = 0x0014,
    DatabaseName = 0x0015,
    CollectionName = 0x0016,
    DocumentName = 0x0017,
    AttachmentName = 0x0018,
    UserName = 0x0019,
    PermissionName = 0x001A,
    StoredProcedureName = 0x001B,
    UserDefinedFunctionName = 0x001C,
    TriggerName = 0x001D,
    EnableScanInQuery = 0x001E,
    EmitVerboseTracesInQuery = 0x001F,
    ConflictName = 0x0020,
    BindReplicaDirective = 0x0021,
    PrimaryMasterKey = 0x0022,
    SecondaryMasterKey = 0x0023,
    PrimaryReadonlyKey = 0x0024,
    SecondaryReadonlyKey = 0x0025,
    ProfileRequest = 0x0026,
    EnableLowPrecisionOrderBy = 0x0027,
    ClientVersion = 0x0028,
    CanCharge = 0x0029,
    CanThrottle = 0x002A,
    PartitionKey = 0x002B,
    PartitionKeyRangeId = 0x002C,
    MigrateCollectionDirective = 0x0030,
    SupportSpatialLegacyCoordinates = 0x0032,
    PartitionCount = 0x0033,
    CollectionRid = 0x0034,
    PartitionKeyRangeName = 0x0035,
    SchemaName = 0x003A,
    FilterBySchemaRid = 0x003B,
    UsePolygonsSmallerThanAHemisphere = 0x003C,
    GatewaySignature = 0x003D,
    EnableLogging = 0x003E,
    AIm = 0x003F,
    PopulateQuotaInfo = 0x0040,
    DisableRuPerMinuteUsage = 0x0041,
    PopulateQueryMetrics = 0x0042,
    ResponseContinuationTokenLimitInKb = 0x0043,
    PopulatePartitionStatistics = 0x0044,
    RemoteStorageType = 0x0045,
    CollectionSecurityIdentifier = 0x0046,
    IfModifiedSince = 0x0047,
    PopulateCollectionThroughputInfo = 0x0048,
    RemainingTimeInMsOnClientRequest = 0x0049,
    ClientRetryAttemptCount = 0x004A,
    TargetLsn = 0x004B,
    TargetGlobalCommittedLsn = 0x004C,
    TransportRequestId = 0x004D,
    RestoreMetadataFilter = 0x004E,
    RestoreParams = 0x004F,
    ShareThroughput = 0x0050,
    PartitionResourceFilter = 0x0051,
    IsReadOnlyScript = 0x0052,
    IsAutoScaleRequest = 0x0053,
    ForceQueryScan = 0x0054,
    CanOfferReplaceComplete = 0x0056,
    ExcludeSystemProperties = 0x0057,
    BinaryId = 0x0058,
    TimeToLiveInSeconds = 0x0059,
    EffectivePartitionKey = 0x005A,
    BinaryPassthroughRequest = 0x005B,
    UserDefinedTypeName = 0x005C,
    EnableDynamicRidRangeAllocation = 0x005D,
    EnumerationDirection = 0x005E,
    StartId = 0x005F,
    EndId = 0x0060,
    FanoutOperationState = 0x0061,
    StartEpk = 0x0062,
    EndEpk = 0x0063,
    ReadFeedKeyType = 0x0064,
    ContentSerializationFormat = 0x0065,
    AllowTentativeWrites = 0x0066,
    IsUserRequest = 0x0067,
    SharedOfferThroughput = 0x0068,
}

/// One registry entry: identity, payload encoding, presence contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDef {
    pub id: HeaderId,
    /// Diagnostic name, used in traces and error text.
    pub name: &'static str,
    pub wire_type: WireType,
    /// Required fields are always populated by the projector.
    pub required: bool,
}

impl HeaderId {
    /// Number of live registry entries.
    pub const COUNT: usize = 96;

    /// One past the highest assigned identifier.
    pub const SPAN: usize = 0x0069;

    /// The registry entry for this identifier.
    pub fn def(self) -> &'static HeaderDef {
        &REGISTRY[self.slot()]
    }

    pub fn wire_type(self) -> WireType {
        self.def().wire_type
    }

    pub fn is_required(self) -> bool {
        self.def().required
    }

    /// Dense position of this identifier in the registry table.
    pub(crate) fn slot(self) -> usize {
        SLOTS[self as usize] as usize
    }
}

/// Resolve a raw wire identifier to its registry entry, if it is known.
pub fn lookup(id: u16) -> Option<&'static HeaderDef> {
    let slot = *SLOTS.get(id as usize)?;
    if slot == u8::MAX {
        return None;
    }
    Some(&REGISTRY[slot as usize])
}

/// All registry entries, ascending by identifier.
pub fn iter_ordered() -> impl Iterator<Item = &'static HeaderDef> {
    REGISTRY.iter()
}

const fn def(id: HeaderId, name: &'static str, wire_type: WireType) -> HeaderDef {
    HeaderDef {
        id,
        name,
        wire_type,
        required: false,
    }
}

const fn required(id: HeaderId, name: &'static str, wire_type: WireType) -> HeaderDef {
    HeaderDef {
        id,
        name,
        wire_type,
        required: true,
    }
}

const TABLE: [HeaderDef; HeaderId::COUNT] = [
    def(HeaderId::ResourceId, "ResourceId", WireType::Bytes),
    def(HeaderId::AuthorizationToken, "AuthorizationToken", WireType::String),
    required(HeaderId::PayloadPresent, "PayloadPresent", WireType::Byte),
    def(HeaderId::Date, "Date", WireType::SmallString),
    def(HeaderId::PageSize, "PageSize", WireType::ULong),
    def(HeaderId::SessionToken, "SessionToken", WireType::String),
    def(HeaderId::ContinuationToken, "ContinuationToken", WireType::String),
    def(HeaderId::IndexingDirective, "IndexingDirective", WireType::Byte),
    def(HeaderId::Match, "Match", WireType::String),
    def(HeaderId::PreTriggerInclude, "PreTriggerInclude", WireType::String),
    def(HeaderId::PostTriggerInclude, "PostTriggerInclude", WireType::String),
    def(HeaderId::IsFanout, "IsFanout", WireType::Byte),
    def(HeaderId::CollectionPartitionIndex, "CollectionPartitionIndex", WireType::ULong),
    def(HeaderId::CollectionServiceIndex, "CollectionServiceIndex", WireType::ULong),
    def(HeaderId::PreTriggerExclude, "PreTriggerExclude", WireType::String),
    def(HeaderId::PostTriggerExclude, "PostTriggerExclude", WireType::String),
    def(HeaderId::ConsistencyLevel, "ConsistencyLevel", WireType::Byte),
    def(HeaderId::EntityId, "EntityId", WireType::String),
    def(HeaderId::ResourceSchemaName, "ResourceSchemaName", WireType::SmallString),
    required(HeaderId::ReplicaPath, "ReplicaPath", WireType::String),
    def(HeaderId::ResourceTokenExpiry, "ResourceTokenExpiry", WireType::ULong),
    def(HeaderId::DatabaseName, "DatabaseName", WireType::String),
    def(HeaderId::CollectionName, "CollectionName", WireType::String),
    def(HeaderId::DocumentName, "DocumentName", WireType::String),
    def(HeaderId::AttachmentName, "AttachmentName", WireType::String),
    def(HeaderId::UserName, "UserName", WireType::String),
    def(HeaderId::PermissionName, "PermissionName", WireType::String),
    def(HeaderId::StoredProcedureName, "StoredProcedureName", WireType::String),
    def(HeaderId::UserDefinedFunctionName, "UserDefinedFunctionName", WireType::String),
    def(HeaderId::TriggerName, "TriggerName", WireType::String),
    def(HeaderId::EnableScanInQuery, "EnableScanInQuery", WireType::Byte),
    def(HeaderId::EmitVerboseTracesInQuery, "EmitVerboseTracesInQuery", WireType::Byte),
    def(HeaderId::ConflictName, "ConflictName", WireType::String),
    def(HeaderId::BindReplicaDirective, "BindReplicaDirective", WireType::String),
    def(HeaderId::PrimaryMasterKey, "PrimaryMasterKey", WireType::String),
    def(HeaderId::SecondaryMasterKey, "SecondaryMasterKey", WireType::String),
    def(HeaderId::PrimaryReadonlyKey, "PrimaryReadonlyKey", WireType::String),
    def(HeaderId::SecondaryReadonlyKey, "SecondaryReadonlyKey", WireType::String),
    def(HeaderId::ProfileRequest, "ProfileRequest", WireType::Byte),
    def(HeaderId::EnableLowPrecisionOrderBy, "EnableLowPrecisionOrderBy", WireType::Byte),
    def(HeaderId::ClientVersion, "ClientVersion", WireType::SmallString),
    def(HeaderId::CanCharge, "CanCharge", WireType::Byte),
    def(HeaderId::CanThrottle, "CanThrottle", WireType::Byte),
    def(HeaderId::PartitionKey, "PartitionKey", WireType::String),
    def(HeaderId::PartitionKeyRangeId, "PartitionKeyRangeId", WireType::String),
    def(HeaderId::MigrateCollectionDirective, "MigrateCollectionDirective", WireType::Byte),
    def(
        HeaderId::SupportSpatialLegacyCoordinates,
        "SupportSpatialLegacyCoordinates",
        WireType::Byte,
    ),
    def(HeaderId::PartitionCount, "PartitionCount", WireType::ULong),
    def(HeaderId::CollectionRid, "CollectionRid", WireType::String),
    def(HeaderId::PartitionKeyRangeName, "PartitionKeyRangeName", WireType::String),
    def(HeaderId::SchemaName, "SchemaName", WireType::String),
    def(HeaderId::FilterBySchemaRid, "FilterBySchemaRid", WireType::String),
    def(
        HeaderId::UsePolygonsSmallerThanAHemisphere,
        "UsePolygonsSmallerThanAHemisphere",
        WireType::Byte,
    ),
    def(HeaderId::GatewaySignature, "GatewaySignature", WireType::String),
    def(HeaderId::EnableLogging, "EnableLogging", WireType::Byte),
    def(HeaderId::AIm, "AIm", WireType::String),
    def(HeaderId::PopulateQuotaInfo, "PopulateQuotaInfo", WireType::Byte),
    def(HeaderId::DisableRuPerMinuteUsage, "DisableRuPerMinuteUsage", WireType::Byte),
    def(HeaderId::PopulateQueryMetrics, "PopulateQueryMetrics", WireType::Byte),
    def(
        HeaderId::ResponseContinuationTokenLimitInKb,
        "ResponseContinuationTokenLimitInKb",
        WireType::ULong,
    ),
    def(HeaderId::PopulatePartitionStatistics, "PopulatePartitionStatistics", WireType::Byte),
    def(HeaderId::RemoteStorageType, "RemoteStorageType", WireType::Byte),
    def(
        HeaderId::CollectionSecurityIdentifier,
        "CollectionSecurityIdentifier",
        WireType::String,
    ),
    def(HeaderId::IfModifiedSince, "IfModifiedSince", WireType::SmallString),
    def(
        HeaderId::PopulateCollectionThroughputInfo,
        "PopulateCollectionThroughputInfo",
        WireType::Byte,
    ),
    def(
        HeaderId::RemainingTimeInMsOnClientRequest,
        "RemainingTimeInMsOnClientRequest",
        WireType::ULong,
    ),
    def(HeaderId::ClientRetryAttemptCount, "ClientRetryAttemptCount", WireType::ULong),
    def(HeaderId::TargetLsn, "TargetLsn", WireType::LongLong),
    def(HeaderId::TargetGlobalCommittedLsn, "TargetGlobalCommittedLsn", WireType::LongLong),
    def(HeaderId::TransportRequestId, "TransportRequestId", WireType::ULong),
    def(HeaderId::RestoreMetadataFilter, "RestoreMetadataFilter", WireType::String),
    def(HeaderId::RestoreParams, "RestoreParams", WireType::String),
    def(HeaderId::ShareThroughput, "ShareThroughput", WireType::Byte),
    def(HeaderId::PartitionResourceFilter, "PartitionResourceFilter", WireType::String),
    def(HeaderId::IsReadOnlyScript, "IsReadOnlyScript", WireType::Byte),
    def(HeaderId::IsAutoScaleRequest, "IsAutoScaleRequest", WireType::Byte),
    def(HeaderId::ForceQueryScan, "ForceQueryScan", WireType::Byte),
    def(HeaderId::CanOfferReplaceComplete, "CanOfferReplaceComplete", WireType::Byte),
    def(HeaderId::ExcludeSystemProperties, "ExcludeSystemProperties", WireType::Byte),
    def(HeaderId::BinaryId, "BinaryId", WireType::Bytes),
    def(HeaderId::TimeToLiveInSeconds, "TimeToLiveInSeconds", WireType::Long),
    def(HeaderId::EffectivePartitionKey, "EffectivePartitionKey", WireType::Bytes),
    def(HeaderId::BinaryPassthroughRequest, "BinaryPassthroughRequest", WireType::Byte),
    def(HeaderId::UserDefinedTypeName, "UserDefinedTypeName", WireType::String),
    def(
        HeaderId::EnableDynamicRidRangeAllocation,
        "EnableDynamicRidRangeAllocation",
        WireType::Byte,
    ),
    def(HeaderId::EnumerationDirection, "EnumerationDirection", WireType::Byte),
    def(HeaderId::StartId, "StartId", WireType::Bytes),
    def(HeaderId::EndId, "EndId", WireType::Bytes),
    def(HeaderId::FanoutOperationState, "FanoutOperationState", WireType::Byte),
    def(HeaderId::StartEpk, "StartEpk", WireType::Bytes),
    def(HeaderId::EndEpk, "EndEpk", WireType::Bytes),
    def(HeaderId::ReadFeedKeyType, "ReadFeedKeyType", WireType::Byte),
    def(HeaderId::ContentSerializationFormat, "ContentSerializationFormat", WireType::Byte),
    def(HeaderId::AllowTentativeWrites, "AllowTentativeWrites", WireType::Byte),
    def(HeaderId::IsUserRequest, "IsUserRequest", WireType::Byte),
    def(HeaderId::SharedOfferThroughput, "SharedOfferThroughput", WireType::ULong),
];

static REGISTRY: [HeaderDef; HeaderId::COUNT] = TABLE;

static SLOTS: [u8; HeaderId::SPAN] = build_slots(&TABLE);

const fn build_slots(defs: &[HeaderDef; HeaderId::COUNT]) -> [u8; HeaderId::SPAN] {
    let mut slots = [u8::MAX; HeaderId::SPAN];
    let mut i = 0;
    while i < defs.len() {
        slots[defs[i].id as usize] = i as u8;
        i += 1;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ascending_and_unique() {
        let mut previous: Option<u16> = None;
        for entry in iter_ordered() {
            let id = entry.id as u16;
            if let Some(prev) = previous {
                assert!(id > prev, "{} out of order", entry.name);
            }
            previous = Some(id);
        }
    }

    #[test]
    fn every_entry_resolves_through_lookup() {
        for entry in iter_ordered() {
            let found = lookup(entry.id as u16).expect(entry.name);
            assert_eq!(found.id, entry.id);
            assert_eq!(found.wire_type, entry.wire_type);
        }
    }

    #[test]
    fn reserved_gaps_do_not_resolve() {
        for id in [0x2D, 0x2E, 0x2F, 0x31, 0x36, 0x37, 0x38, 0x39, 0x55] {
            assert!(lookup(id).is_none(), "0x{id:04X} must stay reserved");
            assert!(HeaderId::try_from(id).is_err());
        }
        assert!(lookup(HeaderId::SPAN as u16).is_none());
        assert!(lookup(u16::MAX).is_none());
    }

    #[test]
    fn required_entries_are_the_framing_fields() {
        let required: Vec<_> = iter_ordered().filter(|e| e.required).map(|e| e.id).collect();
        assert_eq!(required, vec![HeaderId::PayloadPresent, HeaderId::ReplicaPath]);
    }

    #[test]
    fn count_matches_table() {
        assert_eq!(iter_ordered().count(), HeaderId::COUNT);
    }
}

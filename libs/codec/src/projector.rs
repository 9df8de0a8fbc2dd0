//! # Request Projector - Headers to Tokens
//!
//! ## Purpose
//!
//! Populates a [`HeaderStream`] from an abstract [`Request`]: the permissive
//! textual header space is forced into the strict, versioned wire
//! vocabulary here. Three phases run in sequence:
//!
//! 1. **Framing-derived fields**: payload presence and replica path,
//!    always set.
//! 2. **Special-case fields**: enum double-mapping (textual value to public
//!    enum to wire id), lenient boolean coercion, base64-decoded binary
//!    headers, the date and etag-match preferences, the page-size sentinel,
//!    the continuation token, and the resource-id / name-based path parse.
//! 3. **Direct coercion**: every remaining recognized header, dispatched
//!    by name through a static table and coerced by the target's wire type.
//!
//! Headers with no registry entry are ignored; they may still matter to
//! other subsystems (auth signing reads the raw map upstream).
//!
//! ## Error Discipline
//!
//! Any out-of-domain value aborts the projection; no partial stream is
//! handed to the encoder, so a bad request fails before any bytes reach the
//! socket.

use tracing::debug;

use rntbd_types::{
    headers, paths, ConsistencyLevel, ContentSerializationFormat, EnumerationDirection,
    FanoutOperationState, HeaderMap, IndexingDirective, MigrateCollectionDirective, OperationType,
    ReadFeedKeyType, RemoteStorageType, Request,
};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{EncodeError, EncodeResult};
use crate::registry::HeaderId;
use crate::resource_id;
use crate::stream::HeaderStream;
use crate::token::TokenValue;
use crate::wire_enums::{
    WireConsistencyLevel, WireContentSerializationFormat, WireEnumerationDirection,
    WireFanoutOperationState, WireIndexingDirective, WireMigrateCollectionDirective,
    WireReadFeedKeyType, WireRemoteStorageType,
};
use crate::wire_type::WireType;

/// Project a request onto a fresh header stream.
pub fn project(request: &Request) -> EncodeResult<HeaderStream> {
    let mut stream = HeaderStream::new();

    // Framing-derived fields, always set.
    stream.set(
        HeaderId::PayloadPresent,
        TokenValue::Byte(request.has_payload() as u8),
    )?;
    stream.set(
        HeaderId::ReplicaPath,
        TokenValue::Text(request.replica_path.clone()),
    )?;

    let h = &request.headers;

    // Special-case fields.
    set_text(&mut stream, h, headers::A_IM, HeaderId::AIm)?;
    set_bool(&mut stream, h, headers::ENABLE_SCAN_IN_QUERY, HeaderId::EnableScanInQuery)?;
    set_base64(&mut stream, h, headers::BINARY_ID, HeaderId::BinaryId)?;
    set_bool(&mut stream, h, headers::CAN_CHARGE, HeaderId::CanCharge)?;
    set_bool(
        &mut stream,
        h,
        headers::CAN_OFFER_REPLACE_COMPLETE,
        HeaderId::CanOfferReplaceComplete,
    )?;
    set_bool(&mut stream, h, headers::CAN_THROTTLE, HeaderId::CanThrottle)?;
    set_text(
        &mut stream,
        h,
        headers::COLLECTION_SECURITY_IDENTIFIER,
        HeaderId::CollectionSecurityIdentifier,
    )?;
    set_enum(&mut stream, h, headers::CONSISTENCY_LEVEL, HeaderId::ConsistencyLevel, |v| {
        ConsistencyLevel::from_header_value(v).map(|l| WireConsistencyLevel::from(l).id())
    })?;
    set_enum(
        &mut stream,
        h,
        headers::CONTENT_SERIALIZATION_FORMAT,
        HeaderId::ContentSerializationFormat,
        |v| {
            ContentSerializationFormat::from_header_value(v)
                .map(|f| WireContentSerializationFormat::from(f).id())
        },
    )?;
    add_continuation(&mut stream, request)?;
    add_date(&mut stream, h)?;
    set_bool(
        &mut stream,
        h,
        headers::DISABLE_RU_PER_MINUTE_USAGE,
        HeaderId::DisableRuPerMinuteUsage,
    )?;
    set_bool(
        &mut stream,
        h,
        headers::EMIT_VERBOSE_TRACES_IN_QUERY,
        HeaderId::EmitVerboseTracesInQuery,
    )?;
    set_bool(&mut stream, h, headers::ENABLE_LOGGING, HeaderId::EnableLogging)?;
    set_bool(
        &mut stream,
        h,
        headers::ENABLE_LOW_PRECISION_ORDER_BY,
        HeaderId::EnableLowPrecisionOrderBy,
    )?;
    set_text(&mut stream, h, headers::ENTITY_ID, HeaderId::EntityId)?;
    set_enum(
        &mut stream,
        h,
        headers::ENUMERATION_DIRECTION,
        HeaderId::EnumerationDirection,
        |v| {
            EnumerationDirection::from_header_value(v)
                .map(|d| WireEnumerationDirection::from(d).id())
        },
    )?;
    set_bool(
        &mut stream,
        h,
        headers::EXCLUDE_SYSTEM_PROPERTIES,
        HeaderId::ExcludeSystemProperties,
    )?;
    set_enum(
        &mut stream,
        h,
        headers::FANOUT_OPERATION_STATE,
        HeaderId::FanoutOperationState,
        |v| {
            FanoutOperationState::from_header_value(v)
                .map(|s| WireFanoutOperationState::from(s).id())
        },
    )?;
    set_text(&mut stream, h, headers::IF_MODIFIED_SINCE, HeaderId::IfModifiedSince)?;
    set_enum(&mut stream, h, headers::INDEXING_DIRECTIVE, HeaderId::IndexingDirective, |v| {
        IndexingDirective::from_header_value(v).map(|d| WireIndexingDirective::from(d).id())
    })?;
    set_bool(&mut stream, h, headers::IS_AUTO_SCALE_REQUEST, HeaderId::IsAutoScaleRequest)?;
    set_bool(&mut stream, h, headers::IS_FANOUT_REQUEST, HeaderId::IsFanout)?;
    set_bool(&mut stream, h, headers::IS_READ_ONLY_SCRIPT, HeaderId::IsReadOnlyScript)?;
    set_bool(&mut stream, h, headers::IS_USER_REQUEST, HeaderId::IsUserRequest)?;
    add_match(&mut stream, h, request.operation_type)?;
    set_enum(
        &mut stream,
        h,
        headers::MIGRATE_COLLECTION_DIRECTIVE,
        HeaderId::MigrateCollectionDirective,
        |v| {
            MigrateCollectionDirective::from_header_value(v)
                .map(|d| WireMigrateCollectionDirective::from(d).id())
        },
    )?;
    set_sentinel_ulong(&mut stream, h, headers::PAGE_SIZE, HeaderId::PageSize, -1)?;
    set_bool(
        &mut stream,
        h,
        headers::POPULATE_COLLECTION_THROUGHPUT_INFO,
        HeaderId::PopulateCollectionThroughputInfo,
    )?;
    set_bool(
        &mut stream,
        h,
        headers::POPULATE_PARTITION_STATISTICS,
        HeaderId::PopulatePartitionStatistics,
    )?;
    set_bool(&mut stream, h, headers::POPULATE_QUERY_METRICS, HeaderId::PopulateQueryMetrics)?;
    set_bool(&mut stream, h, headers::POPULATE_QUOTA_INFO, HeaderId::PopulateQuotaInfo)?;
    set_bool(&mut stream, h, headers::PROFILE_REQUEST, HeaderId::ProfileRequest)?;
    set_bool(&mut stream, h, headers::FORCE_QUERY_SCAN, HeaderId::ForceQueryScan)?;
    set_enum(&mut stream, h, headers::REMOTE_STORAGE_TYPE, HeaderId::RemoteStorageType, |v| {
        RemoteStorageType::from_header_value(v).map(|t| WireRemoteStorageType::from(t).id())
    })?;
    add_resource_id_or_path(&mut stream, request)?;
    set_sentinel_ulong(
        &mut stream,
        h,
        headers::RESPONSE_CONTINUATION_TOKEN_LIMIT_IN_KB,
        HeaderId::ResponseContinuationTokenLimitInKb,
        0,
    )?;
    set_bool(&mut stream, h, headers::SHARE_THROUGHPUT, HeaderId::ShareThroughput)?;
    add_read_feed_keys(&mut stream, h)?;
    set_bool(
        &mut stream,
        h,
        headers::SUPPORT_SPATIAL_LEGACY_COORDINATES,
        HeaderId::SupportSpatialLegacyCoordinates,
    )?;
    set_bool(
        &mut stream,
        h,
        headers::USE_POLYGONS_SMALLER_THAN_A_HEMISPHERE,
        HeaderId::UsePolygonsSmallerThanAHemisphere,
    )?;

    // Direct coercions, name-driven.
    for &(name, id) in DIRECT_HEADERS {
        fill_from_header(&mut stream, h, name, id)?;
    }

    Ok(stream)
}

/// Headers with no special handling: name → registry id, coerced by the
/// target's wire type.
const DIRECT_HEADERS: &[(&str, HeaderId)] = &[
    (headers::ALLOW_TENTATIVE_WRITES, HeaderId::AllowTentativeWrites),
    (headers::AUTHORIZATION, HeaderId::AuthorizationToken),
    (headers::BINARY_PASSTHROUGH_REQUEST, HeaderId::BinaryPassthroughRequest),
    (headers::BIND_REPLICA_DIRECTIVE, HeaderId::BindReplicaDirective),
    (headers::CLIENT_RETRY_ATTEMPT_COUNT, HeaderId::ClientRetryAttemptCount),
    (headers::COLLECTION_PARTITION_INDEX, HeaderId::CollectionPartitionIndex),
    (headers::COLLECTION_RID, HeaderId::CollectionRid),
    (headers::COLLECTION_SERVICE_INDEX, HeaderId::CollectionServiceIndex),
    (
        headers::ENABLE_DYNAMIC_RID_RANGE_ALLOCATION,
        HeaderId::EnableDynamicRidRangeAllocation,
    ),
    (headers::FILTER_BY_SCHEMA_RESOURCE_ID, HeaderId::FilterBySchemaRid),
    (headers::GATEWAY_SIGNATURE, HeaderId::GatewaySignature),
    (headers::PARTITION_COUNT, HeaderId::PartitionCount),
    (headers::PARTITION_KEY, HeaderId::PartitionKey),
    (headers::PARTITION_KEY_RANGE_ID, HeaderId::PartitionKeyRangeId),
    (headers::PARTITION_RESOURCE_FILTER, HeaderId::PartitionResourceFilter),
    (headers::POST_TRIGGER_EXCLUDE, HeaderId::PostTriggerExclude),
    (headers::POST_TRIGGER_INCLUDE, HeaderId::PostTriggerInclude),
    (headers::PRE_TRIGGER_EXCLUDE, HeaderId::PreTriggerExclude),
    (headers::PRE_TRIGGER_INCLUDE, HeaderId::PreTriggerInclude),
    (headers::PRIMARY_MASTER_KEY, HeaderId::PrimaryMasterKey),
    (headers::PRIMARY_READONLY_KEY, HeaderId::PrimaryReadonlyKey),
    (
        headers::REMAINING_TIME_IN_MS_ON_CLIENT_REQUEST,
        HeaderId::RemainingTimeInMsOnClientRequest,
    ),
    (headers::RESOURCE_SCHEMA_NAME, HeaderId::ResourceSchemaName),
    (headers::RESOURCE_TOKEN_EXPIRY, HeaderId::ResourceTokenExpiry),
    (headers::RESTORE_METADATA_FILTER, HeaderId::RestoreMetadataFilter),
    (headers::RESTORE_PARAMS, HeaderId::RestoreParams),
    (headers::SECONDARY_MASTER_KEY, HeaderId::SecondaryMasterKey),
    (headers::SECONDARY_READONLY_KEY, HeaderId::SecondaryReadonlyKey),
    (headers::SESSION_TOKEN, HeaderId::SessionToken),
    (headers::SHARED_OFFER_THROUGHPUT, HeaderId::SharedOfferThroughput),
    (headers::TARGET_GLOBAL_COMMITTED_LSN, HeaderId::TargetGlobalCommittedLsn),
    (headers::TARGET_LSN, HeaderId::TargetLsn),
    (headers::TIME_TO_LIVE_IN_SECONDS, HeaderId::TimeToLiveInSeconds),
    (headers::TRANSPORT_REQUEST_ID, HeaderId::TransportRequestId),
    (headers::VERSION, HeaderId::ClientVersion),
];

/// Empty header values are treated as absent throughout.
fn non_empty<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).map(String::as_str).filter(|v| !v.is_empty())
}

fn invalid(name: &str, value: &str) -> EncodeError {
    EncodeError::InvalidHeaderValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

/// Lenient boolean coercion: case-insensitive `"true"` is true, anything
/// else is false. Mirrors the server's own tolerance; callers that want
/// strictness reject malformed booleans upstream.
fn parse_lenient_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn set_bool(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    name: &str,
    id: HeaderId,
) -> EncodeResult<()> {
    if let Some(value) = non_empty(headers, name) {
        stream.set(id, TokenValue::Byte(parse_lenient_bool(value) as u8))?;
    }
    Ok(())
}

fn set_text(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    name: &str,
    id: HeaderId,
) -> EncodeResult<()> {
    if let Some(value) = non_empty(headers, name) {
        stream.set(id, TokenValue::Text(value.to_owned()))?;
    }
    Ok(())
}

fn set_base64(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    name: &str,
    id: HeaderId,
) -> EncodeResult<()> {
    if let Some(value) = non_empty(headers, name) {
        let bytes = STANDARD
            .decode(value.as_bytes())
            .map_err(|_| EncodeError::InvalidBase64 { name: name.to_owned() })?;
        stream.set(id, TokenValue::Blob(bytes))?;
    }
    Ok(())
}

/// Enum double-mapping: textual value → public enum → wire id, emitted as a
/// `Byte` token. Unknown text is an invalid header value.
fn set_enum(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    name: &str,
    id: HeaderId,
    to_wire_id: fn(&str) -> Option<u8>,
) -> EncodeResult<()> {
    if let Some(value) = non_empty(headers, name) {
        let wire_id = to_wire_id(value).ok_or_else(|| invalid(name, value))?;
        stream.set(id, TokenValue::Byte(wire_id))?;
    }
    Ok(())
}

/// Parse a signed 64-bit value into a `ULong` token, accepting
/// `[min, 2^32-1]` and folding negatives onto `0xFFFF_FFFF`.
fn set_sentinel_ulong(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    name: &str,
    id: HeaderId,
    min: i64,
) -> EncodeResult<()> {
    if let Some(value) = non_empty(headers, name) {
        let parsed: i64 = value.parse().map_err(|_| invalid(name, value))?;
        if parsed < min || parsed > u32::MAX as i64 {
            return Err(invalid(name, value));
        }
        let wire = if parsed < 0 { u32::MAX } else { parsed as u32 };
        stream.set(id, TokenValue::ULong(wire))?;
    }
    Ok(())
}

/// The continuation token rides on the request, not in the header map.
fn add_continuation(stream: &mut HeaderStream, request: &Request) -> EncodeResult<()> {
    if let Some(continuation) = request.continuation.as_deref().filter(|c| !c.is_empty()) {
        stream.set(HeaderId::ContinuationToken, TokenValue::Text(continuation.to_owned()))?;
    }
    Ok(())
}

/// Prefer `x-ms-date`; proxies and client stacks override the plain HTTP
/// `date` header, so it is only the fallback.
fn add_date(stream: &mut HeaderStream, headers: &HeaderMap) -> EncodeResult<()> {
    let value = non_empty(headers, headers::X_DATE).or_else(|| non_empty(headers, headers::HTTP_DATE));
    if let Some(value) = value {
        stream.set(HeaderId::Date, TokenValue::Text(value.to_owned()))?;
    }
    Ok(())
}

/// Read-style operations send their etag as `If-None-Match`, writes as
/// `If-Match`; both land in the single Match token.
fn add_match(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    operation_type: OperationType,
) -> EncodeResult<()> {
    let name = if operation_type.uses_if_none_match() {
        headers::IF_NONE_MATCH
    } else {
        headers::IF_MATCH
    };
    if let Some(value) = non_empty(headers, name) {
        stream.set(HeaderId::Match, TokenValue::Text(value.to_owned()))?;
    }
    Ok(())
}

/// Read-feed key bounds: the key-type selector plus the base64 id/epk
/// bounds, including the effective partition key itself.
fn add_read_feed_keys(stream: &mut HeaderStream, headers: &HeaderMap) -> EncodeResult<()> {
    set_enum(stream, headers, headers::READ_FEED_KEY_TYPE, HeaderId::ReadFeedKeyType, |v| {
        ReadFeedKeyType::from_header_value(v).map(|t| WireReadFeedKeyType::from(t).id())
    })?;
    set_base64(stream, headers, headers::START_ID, HeaderId::StartId)?;
    set_base64(stream, headers, headers::END_ID, HeaderId::EndId)?;
    set_base64(stream, headers, headers::START_EPK, HeaderId::StartEpk)?;
    set_base64(stream, headers, headers::END_EPK, HeaderId::EndEpk)?;
    set_base64(
        stream,
        headers,
        headers::EFFECTIVE_PARTITION_KEY,
        HeaderId::EffectivePartitionKey,
    )?;
    Ok(())
}

/// Resource identity: the compact parsed resource id when one exists, and
/// for name-based requests the positional walk of the address path.
///
/// The address alternates segment/name pairs. Pair 0 must name the database
/// segment; later pairs with unrecognized segments are skipped so that
/// addresses minted by newer servers still route.
fn add_resource_id_or_path(stream: &mut HeaderStream, request: &Request) -> EncodeResult<()> {
    // Name-based requests can carry a resource id too when the gateway
    // already generated one.
    if let Some(id) = request.resource_id.as_deref().filter(|id| !id.is_empty()) {
        let bytes = resource_id::parse(request.resource_type, id)?;
        stream.set(HeaderId::ResourceId, TokenValue::Blob(bytes))?;
    }

    if !request.is_name_based {
        return Ok(());
    }

    let address = request.resource_address.as_str();
    let fragments: Vec<&str> = address.split('/').filter(|f| !f.is_empty()).collect();

    if fragments.len() >= 2 {
        if fragments[0] == paths::DATABASES {
            stream.set(HeaderId::DatabaseName, TokenValue::Text(fragments[1].to_owned()))?;
        } else {
            return Err(EncodeError::InvalidResourceAddress {
                address: address.to_owned(),
            });
        }
    }

    if fragments.len() >= 4 {
        let id = match fragments[2] {
            paths::COLLECTIONS => Some(HeaderId::CollectionName),
            paths::USERS => Some(HeaderId::UserName),
            paths::USER_DEFINED_TYPES => Some(HeaderId::UserDefinedTypeName),
            segment => {
                debug!(segment, "skipped unrecognized path segment");
                None
            }
        };
        if let Some(id) = id {
            stream.set(id, TokenValue::Text(fragments[3].to_owned()))?;
        }
    }

    if fragments.len() >= 6 {
        let id = match fragments[4] {
            paths::DOCUMENTS => Some(HeaderId::DocumentName),
            paths::STORED_PROCEDURES => Some(HeaderId::StoredProcedureName),
            paths::PERMISSIONS => Some(HeaderId::PermissionName),
            paths::USER_DEFINED_FUNCTIONS => Some(HeaderId::UserDefinedFunctionName),
            paths::TRIGGERS => Some(HeaderId::TriggerName),
            paths::CONFLICTS => Some(HeaderId::ConflictName),
            paths::PARTITION_KEY_RANGES => Some(HeaderId::PartitionKeyRangeName),
            paths::SCHEMAS => Some(HeaderId::SchemaName),
            segment => {
                debug!(segment, "skipped unrecognized path segment");
                None
            }
        };
        if let Some(id) = id {
            stream.set(id, TokenValue::Text(fragments[5].to_owned()))?;
        }
    }

    if fragments.len() >= 8 {
        match fragments[6] {
            paths::ATTACHMENTS => {
                stream.set(HeaderId::AttachmentName, TokenValue::Text(fragments[7].to_owned()))?;
            }
            segment => debug!(segment, "skipped unrecognized path segment"),
        }
    }

    // Pairs beyond the attachment position are ignored.
    Ok(())
}

/// Type-directed coercion for headers without special handling.
fn fill_from_header(
    stream: &mut HeaderStream,
    headers: &HeaderMap,
    name: &str,
    id: HeaderId,
) -> EncodeResult<()> {
    let Some(value) = non_empty(headers, name) else {
        return Ok(());
    };

    match id.wire_type() {
        WireType::SmallString | WireType::String | WireType::ULongString => {
            stream.set(id, TokenValue::Text(value.to_owned()))?;
        }
        WireType::Byte => {
            stream.set(id, TokenValue::Byte(parse_lenient_bool(value) as u8))?;
        }
        WireType::Double => {
            let parsed: f64 = value.parse().map_err(|_| invalid(name, value))?;
            if !parsed.is_finite() {
                return Err(invalid(name, value));
            }
            stream.set(id, TokenValue::Double(parsed))?;
        }
        WireType::Long => {
            let parsed: i64 = value.parse().map_err(|_| invalid(name, value))?;
            if parsed < i64::from(i32::MIN) || parsed > i64::from(i32::MAX) {
                return Err(invalid(name, value));
            }
            stream.set(id, TokenValue::Long(parsed as i32))?;
        }
        WireType::ULong => {
            let parsed: i64 = value.parse().map_err(|_| invalid(name, value))?;
            if parsed < 0 || parsed > i64::from(u32::MAX) {
                return Err(invalid(name, value));
            }
            stream.set(id, TokenValue::ULong(parsed as u32))?;
        }
        WireType::LongLong => {
            let parsed: i64 = value.parse().map_err(|_| invalid(name, value))?;
            stream.set(id, TokenValue::LongLong(parsed))?;
        }
        wire_type @ (WireType::Bytes | WireType::Guid) => {
            unreachable!("header {name} has no textual coercion for {wire_type:?}")
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rntbd_types::{OperationType, ResourceType};

    fn read_request() -> Request {
        Request::new(
            OperationType::Read,
            ResourceType::Document,
            "rntbd://host:14331/apps/a/services/s/partitions/p/replicas/1p/",
        )
    }

    #[test]
    fn framing_fields_are_always_present() {
        let stream = project(&read_request()).unwrap();
        assert_eq!(stream.value(HeaderId::PayloadPresent), Some(&TokenValue::Byte(0)));
        assert_eq!(
            stream.value(HeaderId::ReplicaPath),
            Some(&TokenValue::Text(
                "rntbd://host:14331/apps/a/services/s/partitions/p/replicas/1p/".into()
            ))
        );
        assert_eq!(stream.present_count(), 2);
    }

    #[test]
    fn payload_present_tracks_content() {
        let request = read_request().with_content(vec![1, 2, 3, 4, 5]);
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::PayloadPresent), Some(&TokenValue::Byte(1)));

        let request = read_request().with_content(Vec::new());
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::PayloadPresent), Some(&TokenValue::Byte(0)));
    }

    #[test]
    fn consistency_level_double_maps_to_wire_id() {
        for (text, wire_id) in [
            ("Strong", 0u8),
            ("BoundedStaleness", 1),
            ("Bounded", 1),
            ("Session", 2),
            ("Eventual", 3),
            ("ConsistentPrefix", 4),
        ] {
            let request = read_request().with_header(headers::CONSISTENCY_LEVEL, text);
            let stream = project(&request).unwrap();
            assert_eq!(
                stream.value(HeaderId::ConsistencyLevel),
                Some(&TokenValue::Byte(wire_id)),
                "{text}"
            );
        }
    }

    #[test]
    fn unknown_consistency_level_is_invalid() {
        let request = read_request().with_header(headers::CONSISTENCY_LEVEL, "Relaxed");
        let err = project(&request).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidHeaderValue {
                name: headers::CONSISTENCY_LEVEL.into(),
                value: "Relaxed".into(),
            }
        );
    }

    #[test]
    fn every_enum_header_maps_its_vocabulary() {
        let cases: &[(&str, &str, HeaderId, u8)] = &[
            (headers::CONTENT_SERIALIZATION_FORMAT, "JsonText", HeaderId::ContentSerializationFormat, 0),
            (headers::CONTENT_SERIALIZATION_FORMAT, "CosmosBinary", HeaderId::ContentSerializationFormat, 1),
            (headers::ENUMERATION_DIRECTION, "Forward", HeaderId::EnumerationDirection, 1),
            (headers::ENUMERATION_DIRECTION, "Reverse", HeaderId::EnumerationDirection, 2),
            (headers::FANOUT_OPERATION_STATE, "Started", HeaderId::FanoutOperationState, 1),
            (headers::FANOUT_OPERATION_STATE, "Completed", HeaderId::FanoutOperationState, 2),
            (headers::INDEXING_DIRECTIVE, "Default", HeaderId::IndexingDirective, 0),
            (headers::INDEXING_DIRECTIVE, "Exclude", HeaderId::IndexingDirective, 1),
            (headers::INDEXING_DIRECTIVE, "Include", HeaderId::IndexingDirective, 2),
            (headers::MIGRATE_COLLECTION_DIRECTIVE, "Freeze", HeaderId::MigrateCollectionDirective, 0),
            (headers::MIGRATE_COLLECTION_DIRECTIVE, "Thaw", HeaderId::MigrateCollectionDirective, 1),
            (headers::REMOTE_STORAGE_TYPE, "Standard", HeaderId::RemoteStorageType, 1),
            (headers::REMOTE_STORAGE_TYPE, "Premium", HeaderId::RemoteStorageType, 2),
            (headers::READ_FEED_KEY_TYPE, "ResourceId", HeaderId::ReadFeedKeyType, 0),
            (headers::READ_FEED_KEY_TYPE, "EffectivePartitionKey", HeaderId::ReadFeedKeyType, 1),
        ];
        for &(name, text, id, wire_id) in cases {
            let request = read_request().with_header(name, text);
            let stream = project(&request).unwrap();
            assert_eq!(stream.value(id), Some(&TokenValue::Byte(wire_id)), "{name}={text}");
        }
        for name in [
            headers::CONTENT_SERIALIZATION_FORMAT,
            headers::ENUMERATION_DIRECTION,
            headers::FANOUT_OPERATION_STATE,
            headers::INDEXING_DIRECTIVE,
            headers::MIGRATE_COLLECTION_DIRECTIVE,
            headers::REMOTE_STORAGE_TYPE,
            headers::READ_FEED_KEY_TYPE,
        ] {
            let request = read_request().with_header(name, "Bogus");
            assert!(project(&request).is_err(), "{name}=Bogus must fail");
        }
    }

    #[test]
    fn booleans_are_lenient() {
        let request = read_request()
            .with_header(headers::CAN_CHARGE, "true")
            .with_header(headers::CAN_THROTTLE, "TRUE")
            .with_header(headers::PROFILE_REQUEST, "false")
            .with_header(headers::ENABLE_LOGGING, "yes");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::CanCharge), Some(&TokenValue::Byte(1)));
        assert_eq!(stream.value(HeaderId::CanThrottle), Some(&TokenValue::Byte(1)));
        assert_eq!(stream.value(HeaderId::ProfileRequest), Some(&TokenValue::Byte(0)));
        assert_eq!(stream.value(HeaderId::EnableLogging), Some(&TokenValue::Byte(0)));
    }

    #[test]
    fn page_size_accepts_the_no_limit_sentinel() {
        let cases: &[(&str, Option<u32>)] = &[
            ("-1", Some(u32::MAX)),
            ("0", Some(0)),
            ("100", Some(100)),
            ("4294967295", Some(u32::MAX)),
            ("4294967296", None),
            ("-2", None),
            ("ten", None),
        ];
        for &(text, expected) in cases {
            let request = read_request().with_header(headers::PAGE_SIZE, text);
            match expected {
                Some(wire) => {
                    let stream = project(&request).unwrap();
                    assert_eq!(stream.value(HeaderId::PageSize), Some(&TokenValue::ULong(wire)), "{text}");
                }
                None => assert!(project(&request).is_err(), "{text} must fail"),
            }
        }
    }

    #[test]
    fn continuation_limit_rejects_negatives() {
        let request = read_request()
            .with_header(headers::RESPONSE_CONTINUATION_TOKEN_LIMIT_IN_KB, "0");
        let stream = project(&request).unwrap();
        assert_eq!(
            stream.value(HeaderId::ResponseContinuationTokenLimitInKb),
            Some(&TokenValue::ULong(0))
        );

        let request = read_request()
            .with_header(headers::RESPONSE_CONTINUATION_TOKEN_LIMIT_IN_KB, "-1");
        assert!(project(&request).is_err());
    }

    #[test]
    fn binary_headers_are_base64_decoded() {
        let request = read_request()
            .with_header(headers::BINARY_ID, "AQIDBA==")
            .with_header(headers::START_EPK, "/w==")
            .with_header(headers::EFFECTIVE_PARTITION_KEY, "AAE=");
        let stream = project(&request).unwrap();
        assert_eq!(
            stream.value(HeaderId::BinaryId),
            Some(&TokenValue::Blob(vec![0x01, 0x02, 0x03, 0x04]))
        );
        assert_eq!(stream.value(HeaderId::StartEpk), Some(&TokenValue::Blob(vec![0xFF])));
        assert_eq!(
            stream.value(HeaderId::EffectivePartitionKey),
            Some(&TokenValue::Blob(vec![0x00, 0x01]))
        );
    }

    #[test]
    fn malformed_base64_fails_the_encode() {
        let request = read_request().with_header(headers::BINARY_ID, "not base64!");
        let err = project(&request).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidBase64 {
                name: headers::BINARY_ID.into()
            }
        );
    }

    #[test]
    fn match_header_follows_operation_type() {
        let request = read_request()
            .with_header(headers::IF_NONE_MATCH, "\"etag-a\"")
            .with_header(headers::IF_MATCH, "\"etag-b\"");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::Match), Some(&TokenValue::Text("\"etag-a\"".into())));

        let mut write = request.clone();
        write.operation_type = OperationType::Replace;
        let stream = project(&write).unwrap();
        assert_eq!(stream.value(HeaderId::Match), Some(&TokenValue::Text("\"etag-b\"".into())));

        let mut bare = read_request();
        bare.operation_type = OperationType::Delete;
        let stream = project(&bare).unwrap();
        assert!(!stream.is_present(HeaderId::Match));
    }

    #[test]
    fn date_prefers_the_override_header() {
        let request = read_request()
            .with_header(headers::X_DATE, "Tue, 01 Jan 2019 00:00:00 GMT")
            .with_header(headers::HTTP_DATE, "Wed, 02 Jan 2019 00:00:00 GMT");
        let stream = project(&request).unwrap();
        assert_eq!(
            stream.value(HeaderId::Date),
            Some(&TokenValue::Text("Tue, 01 Jan 2019 00:00:00 GMT".into()))
        );

        let request = read_request().with_header(headers::HTTP_DATE, "Wed, 02 Jan 2019 00:00:00 GMT");
        let stream = project(&request).unwrap();
        assert_eq!(
            stream.value(HeaderId::Date),
            Some(&TokenValue::Text("Wed, 02 Jan 2019 00:00:00 GMT".into()))
        );
    }

    #[test]
    fn name_based_path_populates_positional_tokens() {
        let request = read_request().with_name_based_address("/dbs/db1/colls/c1/docs/d1");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::DatabaseName), Some(&TokenValue::Text("db1".into())));
        assert_eq!(stream.value(HeaderId::CollectionName), Some(&TokenValue::Text("c1".into())));
        assert_eq!(stream.value(HeaderId::DocumentName), Some(&TokenValue::Text("d1".into())));
    }

    #[test]
    fn path_walk_handles_every_segment_family() {
        let cases: &[(&str, HeaderId, &str)] = &[
            ("/dbs/db/users/u1", HeaderId::UserName, "u1"),
            ("/dbs/db/udts/t1", HeaderId::UserDefinedTypeName, "t1"),
            ("/dbs/db/colls/c/sprocs/sp", HeaderId::StoredProcedureName, "sp"),
            ("/dbs/db/users/u/permissions/p", HeaderId::PermissionName, "p"),
            ("/dbs/db/colls/c/udfs/f", HeaderId::UserDefinedFunctionName, "f"),
            ("/dbs/db/colls/c/triggers/t", HeaderId::TriggerName, "t"),
            ("/dbs/db/colls/c/conflicts/k", HeaderId::ConflictName, "k"),
            ("/dbs/db/colls/c/pkranges/r", HeaderId::PartitionKeyRangeName, "r"),
            ("/dbs/db/colls/c/schemas/s", HeaderId::SchemaName, "s"),
            ("/dbs/db/colls/c/docs/d/attachments/a", HeaderId::AttachmentName, "a"),
        ];
        for &(address, id, expected) in cases {
            let request = read_request().with_name_based_address(address);
            let stream = project(&request).unwrap();
            assert_eq!(
                stream.value(id),
                Some(&TokenValue::Text(expected.into())),
                "{address}"
            );
        }
    }

    #[test]
    fn path_tolerates_missing_leading_slash_and_repeats() {
        let request = read_request().with_name_based_address("dbs//db1///colls/c1");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::DatabaseName), Some(&TokenValue::Text("db1".into())));
        assert_eq!(stream.value(HeaderId::CollectionName), Some(&TokenValue::Text("c1".into())));
    }

    #[test]
    fn path_must_start_at_a_database() {
        let request = read_request().with_name_based_address("/apps/app1/dbs/db1");
        let err = project(&request).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidResourceAddress {
                address: "/apps/app1/dbs/db1".into()
            }
        );
    }

    #[test]
    fn unrecognized_inner_segments_are_skipped() {
        let request = read_request().with_name_based_address("/dbs/db1/offers/o1");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::DatabaseName), Some(&TokenValue::Text("db1".into())));
        assert!(!stream.is_present(HeaderId::CollectionName));
        assert!(!stream.is_present(HeaderId::UserName));
    }

    #[test]
    fn pairs_beyond_the_attachment_position_are_ignored() {
        let request = read_request()
            .with_name_based_address("/dbs/db/colls/c/docs/d/attachments/a/extra/e");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::AttachmentName), Some(&TokenValue::Text("a".into())));
    }

    #[test]
    fn single_fragment_address_is_accepted() {
        let request = read_request().with_name_based_address("/dbs");
        let stream = project(&request).unwrap();
        assert!(!stream.is_present(HeaderId::DatabaseName));
    }

    #[test]
    fn resource_id_is_parsed_by_resource_type() {
        let request = read_request().with_resource_id(STANDARD.encode([7u8; 16]));
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::ResourceId), Some(&TokenValue::Blob(vec![7u8; 16])));
    }

    #[test]
    fn malformed_resource_id_fails_the_encode() {
        // A document-typed request with a database-width id.
        let request = read_request().with_resource_id("AQIDBA==");
        assert!(matches!(
            project(&request).unwrap_err(),
            EncodeError::InvalidResourceId { .. }
        ));
    }

    #[test]
    fn direct_coercion_follows_the_wire_type() {
        let request = read_request()
            .with_header(headers::SESSION_TOKEN, "0:1234")
            .with_header(headers::VERSION, "2018-12-31")
            .with_header(headers::TARGET_LSN, "-9223372036854775808")
            .with_header(headers::TRANSPORT_REQUEST_ID, "42")
            .with_header(headers::TIME_TO_LIVE_IN_SECONDS, "-2147483648")
            .with_header(headers::ALLOW_TENTATIVE_WRITES, "true");
        let stream = project(&request).unwrap();
        assert_eq!(stream.value(HeaderId::SessionToken), Some(&TokenValue::Text("0:1234".into())));
        assert_eq!(stream.value(HeaderId::ClientVersion), Some(&TokenValue::Text("2018-12-31".into())));
        assert_eq!(stream.value(HeaderId::TargetLsn), Some(&TokenValue::LongLong(i64::MIN)));
        assert_eq!(stream.value(HeaderId::TransportRequestId), Some(&TokenValue::ULong(42)));
        assert_eq!(stream.value(HeaderId::TimeToLiveInSeconds), Some(&TokenValue::Long(i32::MIN)));
        assert_eq!(stream.value(HeaderId::AllowTentativeWrites), Some(&TokenValue::Byte(1)));
    }

    #[test]
    fn long_and_ulong_boundaries_are_enforced() {
        let cases: &[(&str, &str, bool)] = &[
            (headers::TIME_TO_LIVE_IN_SECONDS, "-2147483648", true),
            (headers::TIME_TO_LIVE_IN_SECONDS, "2147483647", true),
            (headers::TIME_TO_LIVE_IN_SECONDS, "-2147483649", false),
            (headers::TIME_TO_LIVE_IN_SECONDS, "2147483648", false),
            (headers::TRANSPORT_REQUEST_ID, "0", true),
            (headers::TRANSPORT_REQUEST_ID, "4294967295", true),
            (headers::TRANSPORT_REQUEST_ID, "-1", false),
            (headers::TRANSPORT_REQUEST_ID, "4294967296", false),
        ];
        for &(name, text, ok) in cases {
            let request = read_request().with_header(name, text);
            assert_eq!(project(&request).is_ok(), ok, "{name}={text}");
        }
    }

    #[test]
    fn empty_header_values_are_absent() {
        let request = read_request()
            .with_header(headers::SESSION_TOKEN, "")
            .with_header(headers::CONSISTENCY_LEVEL, "")
            .with_header(headers::PAGE_SIZE, "");
        let stream = project(&request).unwrap();
        assert!(!stream.is_present(HeaderId::SessionToken));
        assert!(!stream.is_present(HeaderId::ConsistencyLevel));
        assert!(!stream.is_present(HeaderId::PageSize));
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let request = read_request()
            .with_header("x-ms-something-new", "value")
            .with_header("x-ms-activity-id", "abc");
        let stream = project(&request).unwrap();
        assert_eq!(stream.present_count(), 2);
    }
}

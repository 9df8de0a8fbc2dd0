//! Canonical request-header names.
//!
//! The SDK produces these spellings itself, so lookups in the header map are
//! case-exact; there is no folding layer. Names here must remain stable:
//! the projector's name-driven dispatch and the auth-signing layer upstream
//! both key on them.

pub const A_IM: &str = "A-IM";
pub const ALLOW_TENTATIVE_WRITES: &str = "x-ms-cosmos-allow-tentative-writes";
pub const AUTHORIZATION: &str = "authorization";
pub const BINARY_ID: &str = "x-ms-binary-id";
pub const BINARY_PASSTHROUGH_REQUEST: &str = "x-ms-binary-passthrough-request";
pub const BIND_REPLICA_DIRECTIVE: &str = "x-ms-bind-replica";
pub const CAN_CHARGE: &str = "x-ms-cancharge";
pub const CAN_OFFER_REPLACE_COMPLETE: &str = "x-ms-can-offer-replace-complete";
pub const CAN_THROTTLE: &str = "x-ms-canthrottle";
pub const CLIENT_RETRY_ATTEMPT_COUNT: &str = "x-ms-client-retry-attempt-count";
pub const COLLECTION_PARTITION_INDEX: &str = "collection-partition-index";
pub const COLLECTION_RID: &str = "collection-rid";
pub const COLLECTION_SECURITY_IDENTIFIER: &str = "x-ms-collection-security-identifier";
pub const COLLECTION_SERVICE_INDEX: &str = "collection-service-index";
pub const CONSISTENCY_LEVEL: &str = "x-ms-consistency-level";
pub const CONTENT_SERIALIZATION_FORMAT: &str = "x-ms-documentdb-content-serialization-format";
pub const DISABLE_RU_PER_MINUTE_USAGE: &str = "x-ms-documentdb-disable-ru-per-minute-usage";
pub const EFFECTIVE_PARTITION_KEY: &str = "x-ms-effective-partition-key";
pub const EMIT_VERBOSE_TRACES_IN_QUERY: &str = "x-ms-documentdb-query-emit-traces";
pub const ENABLE_DYNAMIC_RID_RANGE_ALLOCATION: &str = "x-ms-enable-dynamic-rid-range-allocation";
pub const ENABLE_LOGGING: &str = "x-ms-documentdb-script-enable-logging";
pub const ENABLE_LOW_PRECISION_ORDER_BY: &str =
    "x-ms-documentdb-query-enable-low-precision-order-by";
pub const ENABLE_SCAN_IN_QUERY: &str = "x-ms-documentdb-query-enable-scan";
pub const END_EPK: &str = "x-ms-end-epk";
pub const END_ID: &str = "x-ms-end-id";
pub const ENTITY_ID: &str = "x-ms-entity-id";
pub const ENUMERATION_DIRECTION: &str = "x-ms-enumeration-direction";
pub const EXCLUDE_SYSTEM_PROPERTIES: &str = "x-ms-exclude-system-properties";
pub const FANOUT_OPERATION_STATE: &str = "x-ms-fanout-operation-state";
pub const FILTER_BY_SCHEMA_RESOURCE_ID: &str = "x-ms-documentdb-filterby-schema-rid";
pub const FORCE_QUERY_SCAN: &str = "x-ms-documentdb-force-query-scan";
pub const GATEWAY_SIGNATURE: &str = "x-ms-gateway-signature";
pub const HTTP_DATE: &str = "date";
pub const IF_MATCH: &str = "If-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const INDEXING_DIRECTIVE: &str = "x-ms-indexing-directive";
pub const IS_AUTO_SCALE_REQUEST: &str = "x-ms-is-auto-scale";
pub const IS_FANOUT_REQUEST: &str = "x-ms-is-fanout-request";
pub const IS_READ_ONLY_SCRIPT: &str = "x-ms-is-readonly-script";
pub const IS_USER_REQUEST: &str = "x-ms-is-user-request";
pub const MIGRATE_COLLECTION_DIRECTIVE: &str = "x-ms-migratecollection-directive";
pub const PAGE_SIZE: &str = "x-ms-max-item-count";
pub const PARTITION_COUNT: &str = "x-ms-partition-count";
pub const PARTITION_KEY: &str = "x-ms-documentdb-partitionkey";
pub const PARTITION_KEY_RANGE_ID: &str = "x-ms-documentdb-partitionkeyrangeid";
pub const PARTITION_RESOURCE_FILTER: &str = "x-ms-partition-resource-filter";
pub const POPULATE_COLLECTION_THROUGHPUT_INFO: &str =
    "x-ms-documentdb-populatecollectionthroughputinfo";
pub const POPULATE_PARTITION_STATISTICS: &str = "x-ms-documentdb-populatepartitionstatistics";
pub const POPULATE_QUERY_METRICS: &str = "x-ms-documentdb-populatequerymetrics";
pub const POPULATE_QUOTA_INFO: &str = "x-ms-documentdb-populatequotainfo";
pub const POST_TRIGGER_EXCLUDE: &str = "x-ms-documentdb-post-trigger-exclude";
pub const POST_TRIGGER_INCLUDE: &str = "x-ms-documentdb-post-trigger-include";
pub const PRE_TRIGGER_EXCLUDE: &str = "x-ms-documentdb-pre-trigger-exclude";
pub const PRE_TRIGGER_INCLUDE: &str = "x-ms-documentdb-pre-trigger-include";
pub const PRIMARY_MASTER_KEY: &str = "x-ms-primary-master-key";
pub const PRIMARY_READONLY_KEY: &str = "x-ms-primary-readonly-key";
pub const PROFILE_REQUEST: &str = "x-ms-profile-request";
pub const READ_FEED_KEY_TYPE: &str = "x-ms-read-key-type";
pub const REMAINING_TIME_IN_MS_ON_CLIENT_REQUEST: &str = "x-ms-remaining-time-in-ms-on-client";
pub const REMOTE_STORAGE_TYPE: &str = "x-ms-remote-storage-type";
pub const RESOURCE_SCHEMA_NAME: &str = "x-ms-resource-schema-name";
pub const RESOURCE_TOKEN_EXPIRY: &str = "x-ms-documentdb-expiry-seconds";
pub const RESPONSE_CONTINUATION_TOKEN_LIMIT_IN_KB: &str =
    "x-ms-documentdb-responsecontinuationtokenlimitinkb";
pub const RESTORE_METADATA_FILTER: &str = "x-ms-restore-metadata-filter";
pub const RESTORE_PARAMS: &str = "x-ms-restore-params";
pub const SECONDARY_MASTER_KEY: &str = "x-ms-secondary-master-key";
pub const SECONDARY_READONLY_KEY: &str = "x-ms-secondary-readonly-key";
pub const SESSION_TOKEN: &str = "x-ms-session-token";
pub const SHARE_THROUGHPUT: &str = "x-ms-share-throughput";
pub const SHARED_OFFER_THROUGHPUT: &str = "x-ms-cosmos-shared-offer-throughput";
pub const START_EPK: &str = "x-ms-start-epk";
pub const START_ID: &str = "x-ms-start-id";
pub const SUPPORT_SPATIAL_LEGACY_COORDINATES: &str =
    "x-ms-documentdb-supportspatiallegacycoordinates";
pub const TARGET_GLOBAL_COMMITTED_LSN: &str = "x-ms-target-global-committed-lsn";
pub const TARGET_LSN: &str = "x-ms-target-lsn";
pub const TIME_TO_LIVE_IN_SECONDS: &str = "x-ms-time-to-live-in-seconds";
pub const TRANSPORT_REQUEST_ID: &str = "x-ms-transport-request-id";
pub const USE_POLYGONS_SMALLER_THAN_A_HEMISPHERE: &str =
    "x-ms-documentdb-usepolygonssmallerthanahemisphere";
pub const VERSION: &str = "x-ms-version";
pub const X_DATE: &str = "x-ms-date";

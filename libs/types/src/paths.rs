//! Reserved segments of a name-based resource address.
//!
//! A name-based address alternates segment/name pairs, e.g.
//! `/dbs/<db>/colls/<coll>/docs/<doc>`. The segment dictionary is closed;
//! the codec's path walker matches against these constants positionally.

pub const DATABASES: &str = "dbs";
pub const COLLECTIONS: &str = "colls";
pub const USERS: &str = "users";
pub const USER_DEFINED_TYPES: &str = "udts";
pub const DOCUMENTS: &str = "docs";
pub const STORED_PROCEDURES: &str = "sprocs";
pub const PERMISSIONS: &str = "permissions";
pub const USER_DEFINED_FUNCTIONS: &str = "udfs";
pub const TRIGGERS: &str = "triggers";
pub const CONFLICTS: &str = "conflicts";
pub const PARTITION_KEY_RANGES: &str = "pkranges";
pub const SCHEMAS: &str = "schemas";
pub const ATTACHMENTS: &str = "attachments";

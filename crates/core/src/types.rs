/// Primary key type used by persisted entities.
pub type DbId = i64;

/// Timestamp type used across the workspace (UTC).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

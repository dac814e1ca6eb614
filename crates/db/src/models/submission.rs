//! Stored form submissions.

use serde::Serialize;
use sqlx::FromRow;
use formular_core::types::{DbId, Timestamp};

/// A row from the `form_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    /// Submitted name/value pairs as a JSON object, in post order (`json`
    /// column, so Postgres keeps the key order).
    pub data: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for inserting a submission.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub data: serde_json::Map<String, serde_json::Value>,
}

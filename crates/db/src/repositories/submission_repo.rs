//! Repository for the `form_submissions` table.

use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission};

/// Column list for `form_submissions` queries.
const COLUMNS: &str = "id, data, created_at";

/// Provides data access for stored form submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a submission, returning the stored row.
    ///
    /// The data is bound as text and cast to `json`; binding it as `jsonb`
    /// would reorder the keys before they reach the column.
    pub async fn create(pool: &PgPool, dto: &CreateSubmission) -> Result<Submission, sqlx::Error> {
        let data = serde_json::to_string(&dto.data).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let query = format!(
            "INSERT INTO form_submissions (data) VALUES ($1::json) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(data)
            .fetch_one(pool)
            .await
    }

    /// All submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_submissions ORDER BY id DESC");
        sqlx::query_as::<_, Submission>(&query)
            .fetch_all(pool)
            .await
    }
}

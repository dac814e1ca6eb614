//! Where accepted form submissions are kept.
//!
//! [`PgSubmissionStore`] persists to PostgreSQL through `formular_db`;
//! [`MemorySubmissionStore`] is used when no `DATABASE_URL` is configured
//! and by the integration tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use formular_db::models::submission::{CreateSubmission, Submission};
use formular_db::repositories::SubmissionRepo;
use formular_db::DbPool;

use crate::error::AppResult;

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a validated submission and return it with its assigned id.
    async fn insert(&self, data: Map<String, Value>) -> AppResult<Submission>;

    /// All stored submissions, newest first.
    async fn list(&self) -> AppResult<Vec<Submission>>;

    /// Whether the backing storage is reachable.
    async fn is_healthy(&self) -> bool;
}

/// Submissions held in process memory; lost on restart.
#[derive(Default)]
pub struct MemorySubmissionStore {
    rows: RwLock<Vec<Submission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn insert(&self, data: Map<String, Value>) -> AppResult<Submission> {
        let mut rows = self.rows.write().await;
        let submission = Submission {
            id: rows.len() as i64 + 1,
            data: Value::Object(data),
            created_at: Utc::now(),
        };
        rows.push(submission.clone());
        Ok(submission)
    }

    async fn list(&self) -> AppResult<Vec<Submission>> {
        Ok(self.rows.read().await.iter().rev().cloned().collect())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

/// Submissions persisted in the `form_submissions` table.
pub struct PgSubmissionStore {
    pool: DbPool,
}

impl PgSubmissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, data: Map<String, Value>) -> AppResult<Submission> {
        let submission = SubmissionRepo::create(&self.pool, &CreateSubmission { data }).await?;
        Ok(submission)
    }

    async fn list(&self) -> AppResult<Vec<Submission>> {
        Ok(SubmissionRepo::list(&self.pool).await?)
    }

    async fn is_healthy(&self) -> bool {
        formular_db::health_check(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("full_name".into(), Value::String(name.into()));
        map
    }

    #[tokio::test]
    async fn memory_store_assigns_sequential_ids() {
        let store = MemorySubmissionStore::new();
        let first = store.insert(data("Ada")).await.unwrap();
        let second = store.insert(data("Grace")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn memory_store_lists_newest_first() {
        let store = MemorySubmissionStore::new();
        store.insert(data("Ada")).await.unwrap();
        store.insert(data("Grace")).await.unwrap();

        let rows = store.list().await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.data["full_name"].clone()).collect();
        assert_eq!(names, vec![Value::from("Grace"), Value::from("Ada")]);
    }
}

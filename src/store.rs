// src/store.rs

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::paper::{CreatePaperRequest, PastPaper, UpdatePaperRequest};

const PAPER_COLUMNS: &str =
    "id, subject, year, paper_number, score_hundredths, date_completed, time_spent, notes";

/// Errors surfaced by a record store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Abstraction over the past-paper record store.
///
/// Handlers depend on this trait rather than on a concrete backend. Each
/// call is atomic on its own; there is no cross-call transaction and
/// concurrent writes are last-write-wins at the database layer.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, most recently completed first. Same-day records come
    /// back newest-insert first. Callers that derive per-subject "latest"
    /// values rely on this exact ordering.
    async fn get_all(&self) -> Result<Vec<PastPaper>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<PastPaper>, StoreError>;

    /// Inserts a record and returns it with the store-assigned id.
    async fn create(&self, fields: CreatePaperRequest) -> Result<PastPaper, StoreError>;

    /// Applies a partial update. Returns `None` for an unknown id; an empty
    /// patch returns the stored record unchanged.
    async fn update(
        &self,
        id: i64,
        changes: UpdatePaperRequest,
    ) -> Result<Option<PastPaper>, StoreError>;

    /// Returns whether a record with the given id existed and was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Distinct subject names, sorted ascending.
    async fn distinct_subjects(&self) -> Result<Vec<String>, StoreError>;
}

/// SQLite-backed implementation of [`RecordStore`].
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn get_all(&self) -> Result<Vec<PastPaper>, StoreError> {
        let papers = sqlx::query_as::<_, PastPaper>(&format!(
            "SELECT {PAPER_COLUMNS} FROM past_papers ORDER BY date_completed DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(papers)
    }

    async fn get(&self, id: i64) -> Result<Option<PastPaper>, StoreError> {
        let paper = sqlx::query_as::<_, PastPaper>(&format!(
            "SELECT {PAPER_COLUMNS} FROM past_papers WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(paper)
    }

    async fn create(&self, fields: CreatePaperRequest) -> Result<PastPaper, StoreError> {
        let paper = sqlx::query_as::<_, PastPaper>(&format!(
            "INSERT INTO past_papers \
             (subject, year, paper_number, score_hundredths, date_completed, time_spent, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {PAPER_COLUMNS}"
        ))
        .bind(fields.subject)
        .bind(fields.year)
        .bind(fields.paper_number)
        .bind(fields.score)
        .bind(fields.date_completed)
        .bind(fields.time_spent)
        .bind(fields.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(paper)
    }

    async fn update(
        &self,
        id: i64,
        changes: UpdatePaperRequest,
    ) -> Result<Option<PastPaper>, StoreError> {
        if changes.is_empty() {
            return self.get(id).await;
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE past_papers SET ");
        let mut separated = builder.separated(", ");

        if let Some(subject) = changes.subject {
            separated.push("subject = ");
            separated.push_bind_unseparated(subject);
        }

        if let Some(year) = changes.year {
            separated.push("year = ");
            separated.push_bind_unseparated(year);
        }

        if let Some(paper_number) = changes.paper_number {
            separated.push("paper_number = ");
            separated.push_bind_unseparated(paper_number);
        }

        if let Some(score) = changes.score {
            separated.push("score_hundredths = ");
            separated.push_bind_unseparated(score);
        }

        if let Some(date_completed) = changes.date_completed {
            separated.push("date_completed = ");
            separated.push_bind_unseparated(date_completed);
        }

        if let Some(time_spent) = changes.time_spent {
            separated.push("time_spent = ");
            separated.push_bind_unseparated(time_spent);
        }

        if let Some(notes) = changes.notes {
            separated.push("notes = ");
            separated.push_bind_unseparated(notes);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(format!(" RETURNING {PAPER_COLUMNS}"));

        let paper = builder
            .build_query_as::<PastPaper>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(paper)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM past_papers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn distinct_subjects(&self) -> Result<Vec<String>, StoreError> {
        let subjects =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT subject FROM past_papers ORDER BY subject ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(subjects)
    }
}

// src/models/paper.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::score::Score;

/// Represents the 'past_papers' table in the database.
/// One row per logged past-paper attempt.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastPaper {
    pub id: i64,

    /// Subject name, free text (e.g. "Mathematics").
    pub subject: String,

    /// Exam year the paper belongs to.
    pub year: i64,

    /// Paper label within the year (e.g. "1", "2", "3").
    pub paper_number: String,

    /// Percentage score. Kept as fixed-point in the `score_hundredths`
    /// column; no upper or lower bound is enforced.
    #[sqlx(rename = "score_hundredths")]
    pub score: Score,

    pub date_completed: NaiveDate,

    /// Minutes spent on the attempt, if recorded.
    pub time_spent: Option<i64>,

    pub notes: Option<String>,
}

/// DTO for creating a new past-paper record.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaperRequest {
    #[validate(length(min = 1, message = "Subject must not be empty."))]
    pub subject: String,
    pub year: i64,
    #[validate(length(min = 1, message = "Paper number must not be empty."))]
    pub paper_number: String,
    pub score: Score,
    pub date_completed: NaiveDate,
    #[validate(range(min = 0, message = "Time spent must not be negative."))]
    pub time_spent: Option<i64>,
    pub notes: Option<String>,
}

/// DTO for partially updating a record. Fields are optional; absent fields
/// are left untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaperRequest {
    #[validate(length(min = 1, message = "Subject must not be empty."))]
    pub subject: Option<String>,
    pub year: Option<i64>,
    #[validate(length(min = 1, message = "Paper number must not be empty."))]
    pub paper_number: Option<String>,
    pub score: Option<Score>,
    pub date_completed: Option<NaiveDate>,
    #[validate(range(min = 0, message = "Time spent must not be negative."))]
    pub time_spent: Option<i64>,
    pub notes: Option<String>,
}

impl UpdatePaperRequest {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.year.is_none()
            && self.paper_number.is_none()
            && self.score.is_none()
            && self.date_completed.is_none()
            && self.time_spent.is_none()
            && self.notes.is_none()
    }
}

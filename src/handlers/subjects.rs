// src/handlers/subjects.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, store::RecordStore};

/// Lists the distinct subjects observed across all records, sorted
/// ascending. Used by the client to populate filter dropdowns.
pub async fn list_subjects(
    State(store): State<Arc<dyn RecordStore>>,
) -> Result<impl IntoResponse, AppError> {
    let subjects = store.distinct_subjects().await?;

    Ok(Json(subjects))
}

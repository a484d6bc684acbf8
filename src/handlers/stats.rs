// src/handlers/stats.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::{error::AppError, stats, store::RecordStore};

/// Computes summary statistics over the full record history.
///
/// Reads all records fresh on every request; the aggregation itself is pure
/// and takes today's date as input, so this handler is the only place the
/// system clock is consulted.
pub async fn get_statistics(
    State(store): State<Arc<dyn RecordStore>>,
) -> Result<impl IntoResponse, AppError> {
    let papers = store.get_all().await?;
    let statistics = stats::compute(&papers, Utc::now().date_naive());

    Ok(Json(statistics))
}

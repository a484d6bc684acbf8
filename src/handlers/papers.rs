// src/handlers/papers.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    export,
    models::paper::{CreatePaperRequest, UpdatePaperRequest},
    store::RecordStore,
};

/// Lists all records, most recently completed first.
pub async fn list_papers(
    State(store): State<Arc<dyn RecordStore>>,
) -> Result<impl IntoResponse, AppError> {
    let papers = store.get_all().await?;

    Ok(Json(papers))
}

/// Retrieves a single record by ID.
pub async fn get_paper(
    State(store): State<Arc<dyn RecordStore>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let paper = store
        .get(id)
        .await?
        .ok_or(AppError::NotFound("Record not found".to_string()))?;

    Ok(Json(paper))
}

/// Creates a new record from a validated body.
pub async fn create_paper(
    State(store): State<Arc<dyn RecordStore>>,
    Json(payload): Json<CreatePaperRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let paper = store.create(payload).await?;

    Ok((StatusCode::CREATED, Json(paper)))
}

/// Applies a partial update to a record.
pub async fn update_paper(
    State(store): State<Arc<dyn RecordStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePaperRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let paper = store
        .update(id, payload)
        .await?
        .ok_or(AppError::NotFound("Record not found".to_string()))?;

    Ok(Json(paper))
}

/// Deletes a record by ID.
pub async fn delete_paper(
    State(store): State<Arc<dyn RecordStore>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !store.delete(id).await? {
        return Err(AppError::NotFound("Record not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Serves the full record list as a CSV attachment.
pub async fn export_papers(
    State(store): State<Arc<dyn RecordStore>>,
) -> Result<impl IntoResponse, AppError> {
    let papers = store.get_all().await?;
    let csv = export::to_csv(&papers);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"past-papers-export.csv\"",
            ),
        ],
        csv,
    ))
}

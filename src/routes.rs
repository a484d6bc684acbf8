// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{papers, stats, subjects},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires the record CRUD, subjects, stats and CSV-export endpoints.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (record store + config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse::<HeaderValue>().unwrap(),
        "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/records",
            get(papers::list_papers).post(papers::create_paper),
        )
        .route("/records/export", get(papers::export_papers))
        .route(
            "/records/{id}",
            get(papers::get_paper)
                .patch(papers::update_paper)
                .delete(papers::delete_paper),
        )
        .route("/subjects", get(subjects::list_subjects))
        .route("/stats", get(stats::get_statistics))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

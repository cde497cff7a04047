//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::DirectoryError;
use crate::events::EventRecord;
use crate::students::NewStudent;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventsResponse {
    pub scholarship_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /api/students`
///
/// Returns all applicant records.
pub async fn list_students(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_students(&state.pool).await {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// `POST /api/students`
///
/// Stores one applicant record. Answers 201 with the stored record, or 400
/// with the validation message (empty field, duplicate wallet/email).
pub async fn create_student(
    State(state): State<Arc<ApiState>>,
    Json(new_student): Json<NewStudent>,
) -> impl IntoResponse {
    if let Err(message) = new_student.validate() {
        return error_response(StatusCode::BAD_REQUEST, message);
    }

    match db::insert_student(&state.pool, &new_student).await {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(DirectoryError::Validation(message)) => {
            error_response(StatusCode::BAD_REQUEST, message)
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// `GET /scholarships/:id/events`
///
/// Returns all indexed events for the given scholarship identifier.
pub async fn get_scholarship_events(
    State(state): State<Arc<ApiState>>,
    Path(scholarship_id): Path<String>,
) -> impl IntoResponse {
    match db::get_events_for_scholarship(&state.pool, &scholarship_id).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(EventsResponse {
                    scholarship_id,
                    count,
                    events,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// `GET /events`
///
/// Returns all indexed events across all scholarships — the transparency
/// feed the public dashboard renders.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_events(&state.pool).await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(AllEventsResponse { count, events })).into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;

use crate::error::AppError;

use super::repository::{SessionId, SessionStore};
use super::service::{PostingServiceError, PostingSessionService, WizardCommand};

/// Router builder exposing the posting wizard over HTTP.
pub fn posting_router<S>(service: Arc<PostingSessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/postings", post(open_handler::<S>))
        .route(
            "/api/v1/postings/{session_id}",
            get(session_handler::<S>).delete(abandon_handler::<S>),
        )
        .route(
            "/api/v1/postings/{session_id}/commands",
            post(command_handler::<S>),
        )
        .route(
            "/api/v1/postings/{session_id}/review",
            get(review_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn open_handler<S>(State(service): State<Arc<PostingSessionService<S>>>) -> Response
where
    S: SessionStore + 'static,
{
    let opened_on = Local::now().date_naive();
    match service.open(opened_on) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn session_handler<S>(
    State(service): State<Arc<PostingSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn command_handler<S>(
    State(service): State<Arc<PostingSessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(command): axum::Json<WizardCommand>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.apply(&SessionId(session_id), command) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn review_handler<S>(
    State(service): State<Arc<PostingSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.review(&SessionId(session_id)) {
        Ok(review) => (StatusCode::OK, axum::Json(review)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn abandon_handler<S>(
    State(service): State<Arc<PostingSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.abandon(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: PostingServiceError) -> Response {
    AppError::from(err).into_response()
}

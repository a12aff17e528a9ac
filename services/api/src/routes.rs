use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hiring_desk::workflows::dashboard::{self, DashboardSnapshot};
use hiring_desk::workflows::jobs::{self, JobsOverview, JobsTab};
use hiring_desk::workflows::posting::{posting_router, PostingSessionService, SessionStore};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobsQuery {
    #[serde(default)]
    pub(crate) tab: JobsTab,
}

pub(crate) fn with_posting_routes<S>(service: Arc<PostingSessionService<S>>) -> axum::Router
where
    S: SessionStore + 'static,
{
    posting_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/dashboard", axum::routing::get(dashboard_endpoint))
        .route("/api/v1/jobs", axum::routing::get(jobs_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint() -> Json<DashboardSnapshot> {
    Json(dashboard::snapshot())
}

pub(crate) async fn jobs_endpoint(Query(query): Query<JobsQuery>) -> Json<JobsOverview> {
    Json(jobs::overview(query.tab))
}

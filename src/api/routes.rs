use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::service::AddressBookService;
use super::state::AppState;
use crate::error::AppError;
use crate::model::SearchQuery;
use crate::storage::{InterviewRecord, PersonRecord, TaskRecord};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

/// Router builder exposing the address book over HTTP.
pub fn address_book_router(service: Arc<AddressBookService>) -> Router {
    Router::new()
        .route("/api/v1/persons", get(list_persons).post(add_person))
        .route("/api/v1/interviews", get(list_interviews))
        .route("/api/v1/tasks", get(list_tasks))
        .with_state(service)
}

/// Adds health, readiness and metrics endpoints; needs an `AppState` extension layer.
pub fn with_operational_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn list_persons(
    State(service): State<Arc<AddressBookService>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<PersonRecord>> {
    let query = params.q.as_deref().and_then(SearchQuery::parse);
    Json(service.search(query.as_ref()))
}

pub(crate) async fn add_person(
    State(service): State<Arc<AddressBookService>>,
    Json(record): Json<PersonRecord>,
) -> Result<impl IntoResponse, AppError> {
    let stored = service.add_person(&record)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub(crate) async fn list_interviews(
    State(service): State<Arc<AddressBookService>>,
) -> Json<Vec<InterviewRecord>> {
    Json(service.interviews())
}

pub(crate) async fn list_tasks(
    State(service): State<Arc<AddressBookService>>,
) -> Json<Vec<TaskRecord>> {
    Json(service.tasks())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

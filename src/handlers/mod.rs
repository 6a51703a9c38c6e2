use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::CreateEventRequest;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::validation::validate_event;
use crate::AppState;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "event-board",
    };

    success(payload).into_response()
}

pub async fn list_events(State(state): State<AppState>) -> Response {
    success(state.store.list_events()).into_response()
}

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let request = validate_event(&request)?.into_inner();
    let event = state.store.create_event(&request)?;

    Ok(created(event).into_response())
}

pub async fn not_found(method: Method, uri: Uri) -> Response {
    AppError::NotFound(format!("Cannot {} {}", method, uri.path())).into_response()
}

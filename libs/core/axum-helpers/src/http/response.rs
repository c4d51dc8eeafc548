use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `200` with the JSON body when present, otherwise `404` with an empty body.
pub fn wrap_or_not_found<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

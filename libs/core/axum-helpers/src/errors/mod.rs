pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use crate::http::alerts::BadRequestAlert;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1002,
///   "error": "INVALID_ID",
///   "message": "Invalid id: abc",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Structured details such as field validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error type returned by handlers; renders as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Entity-scoped client error, rendered with `X-{app}-error` / `X-{app}-params` headers
    #[error("Bad Request: {}", .0.message)]
    BadRequestAlert(Box<BadRequestAlert>),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl From<BadRequestAlert> for AppError {
    fn from(alert: BadRequestAlert) -> Self {
        AppError::BadRequestAlert(Box::new(alert))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Database(e) => return map_db_error(&e),
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), ErrorCode::JsonExtraction, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", raw);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    format!("Invalid id: {}", raw),
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg, None)
            }
            AppError::BadRequestAlert(alert) => {
                tracing::info!(
                    error_code = ErrorCode::BadRequestAlert.code(),
                    entity = %alert.entity_name,
                    error_key = %alert.error_key,
                    "Bad request: {}",
                    alert.message
                );
                let body = ErrorResponse::new(ErrorCode::BadRequestAlert, alert.message.clone())
                    .with_details(json!({
                        "entity_name": alert.entity_name,
                        "error_key": alert.error_key,
                        "params": alert.entity_name,
                    }));
                return (StatusCode::BAD_REQUEST, alert.headers(), Json(body)).into_response();
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
        };

        error_response(status, code, message, details)
    }
}

/// Storage failures never leak driver messages to clients.
fn map_db_error(error: &DbErr) -> Response {
    match error {
        DbErr::RecordNotFound(what) => {
            tracing::info!(error_code = ErrorCode::NotFound.code(), "Record not found: {}", what);
            error_response(
                StatusCode::NOT_FOUND,
                ErrorCode::NotFound,
                ErrorCode::NotFound.default_message().to_string(),
                None,
            )
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::warn!(
                error_code = ErrorCode::DatabasePoolTimeout.code(),
                "Database connection acquire failed: {}",
                e
            );
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::DatabasePoolTimeout,
                ErrorCode::DatabasePoolTimeout.default_message().to_string(),
                None,
            )
        }
        _ => {
            tracing::error!(
                error_code = ErrorCode::DatabaseError.code(),
                "Database error: {:?}",
                error
            );
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::DatabaseError,
                ErrorCode::DatabaseError.default_message().to_string(),
                None,
            )
        }
    }
}

/// `{ field: [{code, message, params}] }`
fn validation_details(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(fields)
}

pub fn error_response(
    status: StatusCode,
    code: ErrorCode,
    message: String,
    details: Option<Value>,
) -> Response {
    let body = ErrorResponse {
        code: code.code(),
        error: code.as_str().to_string(),
        message,
        details,
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn into_parts(error: AppError) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = error.into_response();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_id_response() {
        let (status, _, body) = into_parts(AppError::InvalidId("abc".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_ID");
        assert_eq!(body["code"], 1002);
        assert_eq!(body["message"], "Invalid id: abc");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_bad_request_alert_response() {
        let alert = BadRequestAlert::new(
            "labellaStoreAppItem",
            "labellaStoreAppItemItemType",
            "idexists",
            "A new itemType cannot already have an ID",
        );
        let (status, headers, body) = into_parts(alert.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BAD_REQUEST_ALERT");
        assert_eq!(body["message"], "A new itemType cannot already have an ID");
        assert_eq!(body["details"]["error_key"], "idexists");
        assert_eq!(body["details"]["entity_name"], "labellaStoreAppItemItemType");
        assert_eq!(
            headers.get("x-labellastoreappitem-error").unwrap(),
            "error.idexists"
        );
        assert_eq!(
            headers.get("x-labellastoreappitem-params").unwrap(),
            "labellaStoreAppItemItemType"
        );
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let errors = Named { name: String::new() }.validate().unwrap_err();
        let (status, _, body) = into_parts(errors.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["name"][0]["code"], "length");
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let (status, _, body) =
            into_parts(AppError::InternalServerError("pool exploded".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_db_errors() {
        let (status, _, body) = into_parts(DbErr::Custom("syntax error".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "DATABASE_ERROR");

        let (status, _, body) =
            into_parts(DbErr::RecordNotFound("item_types".into()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_pool_timeout_is_service_unavailable() {
        let error = DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout);
        let (status, _, body) = into_parts(error.into()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "DATABASE_POOL_TIMEOUT");
        assert_eq!(body["code"], 2013);
    }
}

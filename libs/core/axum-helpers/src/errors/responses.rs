//! Reusable OpenAPI responses for handler annotations.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "max": 255, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid id: abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Entity alert",
    content_type = "application/json",
    example = json!({
        "code": 1013,
        "error": "BAD_REQUEST_ALERT",
        "message": "A new itemType cannot already have an ID",
        "details": {
            "entity_name": "labellaStoreAppItemItemType",
            "error_key": "idexists",
            "params": "labellaStoreAppItemItemType"
        }
    })
)]
pub struct BadRequestAlertResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - Database pool timed out",
    content_type = "application/json",
    example = json!({
        "code": 2013,
        "error": "DATABASE_POOL_TIMEOUT",
        "message": "Database connection pool timed out"
    })
)]
pub struct DatabaseUnavailableResponse(pub ErrorResponse);

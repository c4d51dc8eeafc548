//! Error codes carried by every [`ErrorResponse`](super::ErrorResponse).
//!
//! Each code has a string identifier for clients, an integer for logs and
//! monitoring, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1002);
//! assert_eq!(code.default_message(), "Invalid id format");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed validation
    ValidationError,

    /// Path id is not a valid integer
    InvalidId,

    /// Request body could not be read as JSON
    JsonExtraction,

    NotFound,

    /// Generic client error
    BadRequest,

    /// Client error tied to an entity, reported with alert headers
    BadRequestAlert,

    /// No route matches the request path
    RouteNotFound,

    // Server errors
    InternalError,

    // Database errors (2000-2999)
    /// Query or statement failed
    DatabaseError,

    /// No pooled connection became available in time
    DatabasePoolTimeout,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::BadRequestAlert => "BAD_REQUEST_ALERT",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
        }
    }

    /// Integer code for logs and monitoring.
    ///
    /// - 1000-1999: client and server errors
    /// - 2000-2999: database errors
    pub const fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1012,
            Self::BadRequestAlert => 1013,
            Self::RouteNotFound => 1014,
            Self::DatabaseError => 2003,
            Self::DatabasePoolTimeout => 2013,
        }
    }

    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::BadRequestAlert => "Bad request",
            Self::RouteNotFound => "The requested resource was not found",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database error occurred",
            Self::DatabasePoolTimeout => "Database connection pool timed out",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

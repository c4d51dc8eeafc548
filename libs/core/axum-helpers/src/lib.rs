//! # Axum Helpers
//!
//! Shared building blocks for the store's Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with OpenAPI docs, health checks, graceful shutdown
//! - **[`http`]**: Entity alert headers, CORS, security headers, optional-body responses
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (numeric id path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_cors_layer, create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let config = ServerConfig::default();
//! let cors = create_cors_layer(config.cors_allowed_origins.as_deref(), &Environment::Development)?;
//! let router = create_router::<ApiDoc>(Router::new(), cors).merge(health_router(app_info!()));
//! create_production_app(router, &config, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, close_postgres, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP helpers
pub use http::{
    BadRequestAlert, EntityAlerts, create_cors_layer, security_headers, wrap_or_not_found,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

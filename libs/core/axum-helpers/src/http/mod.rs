//! HTTP building blocks shared by the domain routers.
//!
//! - [`alerts`]: `X-{app}-alert` / `X-{app}-error` entity headers
//! - [`cors`]: CORS layer from `CORS_ALLOWED_ORIGIN`
//! - [`response`]: `200` or empty `404` for optional lookups
//! - [`security`]: security response headers

pub mod alerts;
pub mod cors;
pub mod response;
pub mod security;

pub use alerts::{BadRequestAlert, EntityAlerts};
pub use cors::{create_cors_layer, parse_allowed_origins};
pub use response::wrap_or_not_found;
pub use security::security_headers;

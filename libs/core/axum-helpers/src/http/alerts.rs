//! Entity alert headers.
//!
//! Mutating endpoints announce what happened through `X-{app}-alert` and
//! `X-{app}-params`; entity-scoped client errors use `X-{app}-error` and
//! `X-{app}-params`. `{app}` is the configured application name.
//!
//! ```ignore
//! let alerts = EntityAlerts::new("labellaStoreAppItem", "labellaStoreAppItemItemType");
//! let headers = alerts.created(42);
//! // x-labellastoreappitem-alert: A new labellaStoreAppItemItemType is created with identifier 42
//! // x-labellastoreappitem-params: 42
//! ```

use crate::errors::AppError;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use std::fmt::Display;

/// Alert header builder for one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityAlerts {
    application_name: String,
    entity_name: String,
}

impl EntityAlerts {
    pub fn new(application_name: impl Into<String>, entity_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            entity_name: entity_name.into(),
        }
    }

    pub fn created(&self, id: impl Display) -> HeaderMap {
        self.alert(
            format!("A new {} is created with identifier {}", self.entity_name, id),
            id,
        )
    }

    pub fn updated(&self, id: impl Display) -> HeaderMap {
        self.alert(
            format!("A {} is updated with identifier {}", self.entity_name, id),
            id,
        )
    }

    pub fn deleted(&self, id: impl Display) -> HeaderMap {
        self.alert(
            format!("A {} is deleted with identifier {}", self.entity_name, id),
            id,
        )
    }

    /// 400 error carrying `error.{error_key}` in the `X-{app}-error` header.
    pub fn bad_request(&self, error_key: &str, message: impl Into<String>) -> AppError {
        BadRequestAlert::new(
            self.application_name.clone(),
            self.entity_name.clone(),
            error_key,
            message,
        )
        .into()
    }

    fn alert(&self, message: String, param: impl Display) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &self.application_name, "alert", &message);
        insert(&mut headers, &self.application_name, "params", &param.to_string());
        headers
    }
}

/// Payload of [`AppError::BadRequestAlert`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadRequestAlert {
    pub application_name: String,
    pub entity_name: String,
    pub error_key: String,
    pub message: String,
}

impl BadRequestAlert {
    pub fn new(
        application_name: impl Into<String>,
        entity_name: impl Into<String>,
        error_key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            entity_name: entity_name.into(),
            error_key: error_key.into(),
            message: message.into(),
        }
    }

    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(
            &mut headers,
            &self.application_name,
            "error",
            &format!("error.{}", self.error_key),
        );
        insert(&mut headers, &self.application_name, "params", &self.entity_name);
        headers
    }
}

/// Header names are case-insensitive; they are stored lowercased.
fn header_name(application_name: &str, suffix: &str) -> Option<HeaderName> {
    let name = format!("x-{}-{}", application_name, suffix).to_ascii_lowercase();
    HeaderName::try_from(name).ok()
}

fn insert(headers: &mut HeaderMap, application_name: &str, suffix: &str, value: &str) {
    match (
        header_name(application_name, suffix),
        HeaderValue::from_str(value),
    ) {
        (Some(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => tracing::warn!(
            application_name,
            suffix,
            "Skipping alert header that is not a valid HTTP header"
        ),
    }
}
